use super::*;

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn create_vote(&self, _vote: Vote) -> Result<()> {
        unreachable!();
    }
    fn update_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_vote(&self, request_id: &str, user_id: &str) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), request_id, user_id)
    }
    fn load_votes_of_requests(&self, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_requests(&mut self.conn.borrow_mut(), request_ids)
    }
    fn load_votes_of_user(&self, user_id: &str, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_user(&mut self.conn.borrow_mut(), user_id, request_ids)
    }
}

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn create_vote(&self, vote: Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), id)
    }

    fn get_vote(&self, request_id: &str, user_id: &str) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), request_id, user_id)
    }
    fn load_votes_of_requests(&self, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_requests(&mut self.conn.borrow_mut(), request_ids)
    }
    fn load_votes_of_user(&self, user_id: &str, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_user(&mut self.conn.borrow_mut(), user_id, request_ids)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), id)
    }

    fn get_vote(&self, request_id: &str, user_id: &str) -> Result<Option<Vote>> {
        get_vote(&mut self.conn.borrow_mut(), request_id, user_id)
    }
    fn load_votes_of_requests(&self, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_requests(&mut self.conn.borrow_mut(), request_ids)
    }
    fn load_votes_of_user(&self, user_id: &str, request_ids: &[&str]) -> Result<Vec<Vote>> {
        load_votes_of_user(&mut self.conn.borrow_mut(), user_id, request_ids)
    }
}

fn load_vote(model: models::VoteEntity) -> Result<Vote> {
    let models::VoteEntity {
        id,
        request_id,
        user_id,
        vote_type,
    } = model;
    let vote_type = vote_type
        .parse::<VoteType>()
        .map_err(|_| anyhow!("Invalid vote type: {vote_type}"))?;
    Ok(Vote {
        id: id.into(),
        request_id: request_id.into(),
        user_id: user_id.into(),
        vote_type,
    })
}

fn create_vote(conn: &mut SqliteConnection, vote: Vote) -> Result<()> {
    let model = models::NewVote::from(&vote);
    diesel::insert_into(schema::votes::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    use schema::votes::dsl;
    let model = models::NewVote::from(vote);
    let count = diesel::update(dsl::votes.filter(dsl::id.eq(vote.id.as_str())))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_vote(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::votes::dsl;
    let count = diesel::delete(dsl::votes.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_vote(conn: &mut SqliteConnection, request_id: &str, user_id: &str) -> Result<Option<Vote>> {
    use schema::votes::dsl;
    dsl::votes
        .filter(dsl::request_id.eq(request_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::VoteEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_vote)
        .transpose()
}

fn load_votes_of_requests(
    conn: &mut SqliteConnection,
    request_ids: &[&str],
) -> Result<Vec<Vote>> {
    use schema::votes::dsl;
    dsl::votes
        .filter(dsl::request_id.eq_any(request_ids))
        .load::<models::VoteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_vote)
        .collect()
}

fn load_votes_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    request_ids: &[&str],
) -> Result<Vec<Vote>> {
    use schema::votes::dsl;
    dsl::votes
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::request_id.eq_any(request_ids))
        .load::<models::VoteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_vote)
        .collect()
}

use super::*;

impl<'a> RequestRepo for DbReadOnly<'a> {
    fn create_request(&self, _request: Request) -> Result<()> {
        unreachable!();
    }
    fn update_request(&self, _request: &Request) -> Result<()> {
        unreachable!();
    }
    fn delete_request(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_request(&self, id: &str) -> Result<Request> {
        get_request(&mut self.conn.borrow_mut(), id)
    }
    fn requests_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<Request>> {
        requests_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_requests(&self) -> Result<usize> {
        count_requests(&mut self.conn.borrow_mut())
    }
}

impl<'a> RequestRepo for DbReadWrite<'a> {
    fn create_request(&self, request: Request) -> Result<()> {
        create_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_request(&self, request: &Request) -> Result<()> {
        update_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_request(&self, id: &str) -> Result<()> {
        delete_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_request(&self, id: &str) -> Result<Request> {
        get_request(&mut self.conn.borrow_mut(), id)
    }
    fn requests_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<Request>> {
        requests_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_requests(&self) -> Result<usize> {
        count_requests(&mut self.conn.borrow_mut())
    }
}

impl<'a> RequestRepo for DbConnection<'a> {
    fn create_request(&self, request: Request) -> Result<()> {
        create_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_request(&self, request: &Request) -> Result<()> {
        update_request(&mut self.conn.borrow_mut(), request)
    }
    fn delete_request(&self, id: &str) -> Result<()> {
        delete_request(&mut self.conn.borrow_mut(), id)
    }

    fn get_request(&self, id: &str) -> Result<Request> {
        get_request(&mut self.conn.borrow_mut(), id)
    }
    fn requests_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<Request>> {
        requests_in_bbox(&mut self.conn.borrow_mut(), bbox)
    }
    fn count_requests(&self) -> Result<usize> {
        count_requests(&mut self.conn.borrow_mut())
    }
}

fn load_request(model: models::RequestEntity) -> Result<Request> {
    let models::RequestEntity {
        id,
        created_by,
        lat,
        lng,
        category,
        subcategory,
        urgency,
        notes,
        created_at,
    } = model;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position: {lat},{lng}"))?;
    let category = category
        .parse::<Category>()
        .map_err(|_| anyhow!("Invalid category: {category}"))?;
    let urgency = urgency
        .parse::<Urgency>()
        .map_err(|_| anyhow!("Invalid urgency: {urgency}"))?;
    Ok(Request {
        id: id.into(),
        created_by: created_by.into(),
        pos,
        category,
        subcategory,
        urgency,
        notes,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_request(conn: &mut SqliteConnection, request: Request) -> Result<()> {
    let model = models::NewRequest::from(&request);
    diesel::insert_into(schema::requests::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_request(conn: &mut SqliteConnection, id: &str) -> Result<Request> {
    use schema::requests::dsl;
    let model = dsl::requests
        .filter(dsl::id.eq(id))
        .first::<models::RequestEntity>(conn)
        .map_err(from_diesel_err)?;
    load_request(model)
}

fn requests_in_bbox(conn: &mut SqliteConnection, bbox: &MapBbox) -> Result<Vec<Request>> {
    use schema::requests::dsl;
    let (sw, ne) = (bbox.south_west(), bbox.north_east());
    let mut query = dsl::requests
        .filter(dsl::lat.ge(sw.lat().to_deg()))
        .filter(dsl::lat.le(ne.lat().to_deg()))
        .into_boxed();
    if sw.lng().to_deg() <= ne.lng().to_deg() {
        query = query.filter(
            dsl::lng
                .ge(sw.lng().to_deg())
                .and(dsl::lng.le(ne.lng().to_deg())),
        );
    } else {
        // Spans the antimeridian.
        query = query.filter(
            dsl::lng
                .ge(sw.lng().to_deg())
                .or(dsl::lng.le(ne.lng().to_deg())),
        );
    }
    query
        .load::<models::RequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_request)
        .collect()
}

fn update_request(conn: &mut SqliteConnection, request: &Request) -> Result<()> {
    use schema::requests::dsl;
    let model = models::NewRequest::from(request);
    let count = diesel::update(dsl::requests.filter(dsl::id.eq(request.id.as_str())))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::requests::dsl;
    // Votes are removed by the cascading foreign key.
    let count = diesel::delete(dsl::requests.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn count_requests(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::requests::dsl;
    Ok(dsl::requests
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

use super::*;

impl UserTokenRepo for DbReadOnly<'_> {
    fn replace_login_token(&self, _token: LoginToken) -> Result<EmailNonce> {
        unreachable!();
    }
    fn consume_login_token(&self, _email_nonce: &EmailNonce) -> Result<LoginToken> {
        unreachable!();
    }
    fn delete_expired_login_tokens(&self, _expired_before: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl UserTokenRepo for DbReadWrite<'_> {
    fn replace_login_token(&self, token: LoginToken) -> Result<EmailNonce> {
        replace_login_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_login_token(&self, email_nonce: &EmailNonce) -> Result<LoginToken> {
        consume_login_token(&mut self.conn.borrow_mut(), email_nonce)
    }
    fn delete_expired_login_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_login_tokens(&mut self.conn.borrow_mut(), expired_before)
    }
}

impl UserTokenRepo for DbConnection<'_> {
    fn replace_login_token(&self, token: LoginToken) -> Result<EmailNonce> {
        replace_login_token(&mut self.conn.borrow_mut(), token)
    }
    fn consume_login_token(&self, email_nonce: &EmailNonce) -> Result<LoginToken> {
        consume_login_token(&mut self.conn.borrow_mut(), email_nonce)
    }
    fn delete_expired_login_tokens(&self, expired_before: Timestamp) -> Result<usize> {
        delete_expired_login_tokens(&mut self.conn.borrow_mut(), expired_before)
    }
}

fn replace_login_token(conn: &mut SqliteConnection, token: LoginToken) -> Result<EmailNonce> {
    let model = models::NewUserToken {
        email: &token.email_nonce.email,
        nonce: token.email_nonce.nonce.to_string(),
        expires_at: token.expires_at.as_millis(),
    };
    // At most one pending token per address.
    diesel::replace_into(schema::user_tokens::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(token.email_nonce)
}

fn consume_login_token(
    conn: &mut SqliteConnection,
    email_nonce: &EmailNonce,
) -> Result<LoginToken> {
    use schema::user_tokens::dsl;
    let token = get_login_token_by_email(conn, &email_nonce.email)?;
    let target = dsl::user_tokens
        .filter(dsl::email.eq(email_nonce.email.as_str()))
        .filter(dsl::nonce.eq(email_nonce.nonce.to_string()));
    if diesel::delete(target)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(email_nonce, &token.email_nonce);
    Ok(token)
}

fn delete_expired_login_tokens(
    conn: &mut SqliteConnection,
    expired_before: Timestamp,
) -> Result<usize> {
    use schema::user_tokens::dsl;
    diesel::delete(dsl::user_tokens.filter(dsl::expires_at.lt(expired_before.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_login_token_by_email(conn: &mut SqliteConnection, email: &str) -> Result<LoginToken> {
    use schema::user_tokens::dsl;
    let model = dsl::user_tokens
        .filter(dsl::email.eq(email))
        .first::<models::UserTokenEntity>(conn)
        .map_err(from_diesel_err)?;
    let models::UserTokenEntity {
        email,
        nonce,
        expires_at,
    } = model;
    let nonce = nonce
        .parse::<Nonce>()
        .map_err(|_| anyhow!("Invalid nonce: {nonce}"))?;
    Ok(LoginToken {
        email_nonce: EmailNonce { email, nonce },
        expires_at: Timestamp::from_millis(expires_at),
    })
}

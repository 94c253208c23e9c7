use time::Duration;

use super::prelude::*;

/// How long a sign-in link stays usable after it has been requested.
pub const LOGIN_TOKEN_VALIDITY: Duration = Duration::days(1);

/// Issues a fresh one-time sign-in token for the given address.
///
/// Unknown addresses are registered on the fly, so requesting a link is
/// the only sign-up step there is. Any previously pending token for the
/// same address is invalidated by the replacement.
pub fn request_login_link<R>(repo: &R, email: EmailAddress) -> Result<EmailNonce>
where
    R: UserRepo + UserTokenRepo,
{
    if repo.try_get_user_by_email(&email)?.is_none() {
        let user = User {
            id: Id::new(),
            email: email.clone(),
            created_at: Timestamp::now(),
        };
        repo.create_user(&user)?;
        log::info!("Registered new user {}", user.id);
    }
    let email_nonce = EmailNonce {
        email: email.into_string(),
        nonce: Nonce::new(),
    };
    let token = LoginToken {
        email_nonce,
        expires_at: Timestamp::now() + LOGIN_TOKEN_VALIDITY,
    };
    Ok(repo.replace_login_token(token)?)
}

/// Redeems an encoded sign-in token and returns the session it opens.
///
/// The token is consumed unconditionally, i.e. a second attempt with the
/// same link fails even if the first one only failed on expiry.
pub fn consume_login_token<R>(repo: &R, encoded_token: &str) -> Result<Session>
where
    R: UserRepo + UserTokenRepo,
{
    let email_nonce = EmailNonce::decode_from_str(encoded_token)?;
    let token = repo
        .consume_login_token(&email_nonce)
        .map_err(|err| match err {
            RepoError::NotFound => Error::TokenInvalid,
            _ => Error::Repo(err),
        })?;
    debug_assert_eq!(email_nonce, token.email_nonce);
    if token.expires_at < Timestamp::now() {
        return Err(Error::TokenExpired);
    }
    let email = token
        .email_nonce
        .email
        .parse::<EmailAddress>()
        .map_err(|_| Error::TokenInvalid)?;
    let user = repo.get_user_by_email(&email)?;
    Ok(Session {
        user_id: user.id,
        email: user.email,
    })
}

pub fn delete_expired_login_tokens<R: UserTokenRepo>(repo: &R) -> Result<usize> {
    let expired_before = Timestamp::now();
    Ok(repo.delete_expired_login_tokens(expired_before)?)
}

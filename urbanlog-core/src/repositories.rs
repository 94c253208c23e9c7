// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait RequestRepo {
    fn create_request(&self, request: Request) -> Result<()>;

    fn get_request(&self, id: &str) -> Result<Request>;

    /// All requests whose position lies within the closed bounding box.
    fn requests_in_bbox(&self, bbox: &MapBbox) -> Result<Vec<Request>>;

    /// Overwrites the mutable fields of an existing request.
    /// Position and owner are never changed by callers.
    fn update_request(&self, request: &Request) -> Result<()>;

    /// Permanently removes a request together with its votes.
    fn delete_request(&self, id: &str) -> Result<()>;

    fn count_requests(&self) -> Result<usize>;
}

pub trait VoteRepo {
    fn create_vote(&self, vote: Vote) -> Result<()>;
    fn update_vote(&self, vote: &Vote) -> Result<()>;
    fn delete_vote(&self, id: &str) -> Result<()>;

    fn get_vote(&self, request_id: &str, user_id: &str) -> Result<Option<Vote>>;

    // Aggregation input only: individual rows must never be exposed
    // beyond the querying use case.
    fn load_votes_of_requests(&self, request_ids: &[&str]) -> Result<Vec<Vote>>;

    // Restricted to a single voter, for own-vote annotation.
    fn load_votes_of_user(&self, user_id: &str, request_ids: &[&str]) -> Result<Vec<Vote>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}

pub trait UserTokenRepo {
    /// Replaces any pending login token of the same e-mail address.
    fn replace_login_token(&self, token: LoginToken) -> Result<EmailNonce>;

    /// Removes and returns the pending token, if any.
    fn consume_login_token(&self, email_nonce: &EmailNonce) -> Result<LoginToken>;

    fn delete_expired_login_tokens(&self, expired_before: Timestamp) -> Result<usize>;
}

use crate::repositories::*;

/// Combined access to all repositories of a single backing store.
pub trait Db: RequestRepo + VoteRepo + UserRepo + UserTokenRepo {}

impl<T> Db for T where T: RequestRepo + VoteRepo + UserRepo + UserTokenRepo {}

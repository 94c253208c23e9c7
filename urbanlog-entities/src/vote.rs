use strum::{Display, EnumString};

use crate::id::Id;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

/// A signed endorsement by one identity on one request.
///
/// At most one vote exists per `(request_id, user_id)` pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id         : Id,
    pub request_id : Id,
    pub user_id    : Id,
    pub vote_type  : VoteType,
}

/// Aggregate up/down counts of a single request, computed at read time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    pub fn score(self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}

use crate::entities::{Request, Vote, VoteTally, VoteType};

pub trait Tallied {
    fn tally(&self, votes: &[Vote]) -> VoteTally;
}

impl Tallied for Request {
    fn tally(&self, votes: &[Vote]) -> VoteTally {
        debug_assert_eq!(
            votes.len(),
            votes.iter().filter(|v| v.request_id == self.id).count()
        );
        votes
            .iter()
            .fold(VoteTally::default(), |mut acc, vote| {
                match vote.vote_type {
                    VoteType::Up => acc.upvotes += 1,
                    VoteType::Down => acc.downvotes += 1,
                }
                acc
            })
    }
}

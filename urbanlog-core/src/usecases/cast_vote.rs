use super::prelude::*;

/// Applies one click of the up/down vote control.
///
/// Per (request, voter) pair the vote cycles through three states:
/// no vote -> voted -> no vote when the same direction is clicked again,
/// while clicking the opposite direction flips the existing row in place.
///
/// The lookup and the subsequent mutation are intentionally a single
/// conditional sequence. Callers are expected to run it inside one store
/// transaction; the store's unique (request_id, user_id) index backstops
/// any remaining concurrent insert.
pub fn cast_vote<R>(repo: &R, request_id: &Id, voter_id: &Id, vote_type: VoteType) -> Result<()>
where
    R: RequestRepo + VoteRepo,
{
    if !voter_id.is_valid() {
        return Err(Error::Unauthorized);
    }
    // Voting on a vanished request must fail with NotFound instead of
    // leaving an orphaned row.
    let _ = repo.get_request(request_id.as_str())?;

    match repo.get_vote(request_id.as_str(), voter_id.as_str())? {
        None => {
            repo.create_vote(Vote {
                id: Id::new(),
                request_id: request_id.clone(),
                user_id: voter_id.clone(),
                vote_type,
            })?;
        }
        Some(existing) if existing.vote_type == vote_type => {
            repo.delete_vote(existing.id.as_str())?;
        }
        Some(existing) => {
            repo.update_vote(&Vote {
                vote_type,
                ..existing
            })?;
        }
    }
    Ok(())
}

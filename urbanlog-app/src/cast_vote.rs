use super::*;

/// Applies one click of the vote control for the given user.
///
/// The whole toggle sequence runs in a single transaction; see
/// `usecases::cast_vote` for the three-state cycle.
pub fn cast_vote(
    connections: &sqlite::Connections,
    user_id: &Id,
    request_id: &Id,
    vote_type: VoteType,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::cast_vote(conn, request_id, user_id, vote_type))
        .map_err(|err| {
            warn!("Failed to cast vote on request {request_id}: {err}");
            AppError::Write(err)
        })
}

use super::*;

/// Applies an owner's edit to the mutable fields of a request.
pub fn update_request(
    connections: &sqlite::Connections,
    user_id: &Id,
    update: usecases::RequestUpdate,
) -> Result<Request> {
    let request = connections
        .exclusive()?
        .transaction(|conn| usecases::update_request(conn, user_id, update))
        .map_err(|err| {
            warn!("Failed to update request: {err}");
            AppError::Write(err)
        })?;
    info!("Updated request {}", request.id);
    Ok(request)
}

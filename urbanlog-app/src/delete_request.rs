use super::*;

/// Permanently removes an owner's request together with its votes.
pub fn delete_request(connections: &sqlite::Connections, user_id: &Id, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_request(conn, user_id, id))
        .map_err(|err| {
            warn!("Failed to delete request {id}: {err}");
            AppError::Write(err)
        })?;
    info!("Deleted request {id}");
    Ok(())
}

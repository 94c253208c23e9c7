use super::prelude::*;

/// Permanently removes a request and its votes. Only the owner may
/// delete; there is no soft-delete or undo.
pub fn delete_request<R: RequestRepo>(repo: &R, user_id: &Id, id: &Id) -> Result<()> {
    let request = repo.get_request(id.as_str())?;
    if request.created_by != *user_id {
        return Err(Error::Forbidden);
    }
    repo.delete_request(id.as_str())?;
    Ok(())
}

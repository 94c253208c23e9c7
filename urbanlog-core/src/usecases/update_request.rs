use super::prelude::*;
use crate::util::validate;

/// The four mutable fields of a request. Position and owner can never
/// be changed after creation.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct RequestUpdate {
    pub id          : Id,
    pub category    : Category,
    pub subcategory : String,
    pub urgency     : Urgency,
    pub notes       : String,
}

pub fn update_request<R: RequestRepo>(
    repo: &R,
    user_id: &Id,
    update: RequestUpdate,
) -> Result<Request> {
    let RequestUpdate {
        id,
        category,
        subcategory,
        urgency,
        notes,
    } = update;
    let mut request = repo.get_request(id.as_str())?;
    if request.created_by != *user_id {
        return Err(Error::Forbidden);
    }
    let notes = validate::non_empty_notes(&notes).ok_or(Error::EmptyNotes)?;
    if !category.contains_subcategory(&subcategory) {
        return Err(Error::Subcategory);
    }
    request.category = category;
    request.subcategory = subcategory;
    request.urgency = urgency;
    request.notes = notes;
    repo.update_request(&request)?;
    Ok(request)
}

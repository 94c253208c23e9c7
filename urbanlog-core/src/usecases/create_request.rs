use super::prelude::*;
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub created_by  : Id,
    pub pos         : MapPoint,
    pub category    : Category,
    pub subcategory : String,
    pub urgency     : Urgency,
    pub notes       : String,
}

pub fn create_request<R: RequestRepo>(repo: &R, new_request: NewRequest) -> Result<Request> {
    let NewRequest {
        created_by,
        pos,
        category,
        subcategory,
        urgency,
        notes,
    } = new_request;
    if !created_by.is_valid() {
        return Err(Error::Unauthorized);
    }
    if !pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    // The composer is the user-facing gate for this; re-checked here so
    // that no empty row can reach the store through other callers.
    let notes = validate::non_empty_notes(&notes).ok_or(Error::EmptyNotes)?;
    if !category.contains_subcategory(&subcategory) {
        return Err(Error::Subcategory);
    }
    let request = Request {
        id: Id::new(),
        created_by,
        pos,
        category,
        subcategory,
        urgency,
        notes,
        created_at: Timestamp::now(),
    };
    repo.create_request(request.clone())?;
    Ok(request)
}

use crate::{category::Category, geo::MapPoint, id::Id, time::Timestamp, urgency::Urgency};

/// A single reported community improvement point.
///
/// `id`, `created_by`, `pos`, and `created_at` are immutable after
/// creation; the remaining fields may be edited by the owner.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id          : Id,
    pub created_by  : Id,
    pub pos         : MapPoint,
    pub category    : Category,
    pub subcategory : String,
    pub urgency     : Urgency,
    pub notes       : String,
    pub created_at  : Timestamp,
}

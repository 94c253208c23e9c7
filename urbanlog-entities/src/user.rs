use crate::{email::EmailAddress, id::Id, time::Timestamp};

/// A registered identity.
///
/// Sign-in is passwordless (e-mail link), so there is nothing to store
/// beyond the address itself.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub email      : EmailAddress,
    pub created_at : Timestamp,
}

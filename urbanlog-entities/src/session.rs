use crate::{email::EmailAddress, id::Id};

/// The authenticated identity attached to a client, as delivered by the
/// auth provider after a sign-in link has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Id,
    pub email: EmailAddress,
}

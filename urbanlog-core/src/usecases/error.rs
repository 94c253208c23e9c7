use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The notes must not be empty")]
    EmptyNotes,
    #[error("Invalid email address")]
    Email,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The subcategory does not belong to the category")]
    Subcategory,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<urbanlog_entities::email::EmailAddressParseError> for Error {
    fn from(_: urbanlog_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<urbanlog_entities::nonce::EmailNonceDecodingError> for Error {
    fn from(_: urbanlog_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::TokenInvalid
    }
}

use thiserror::Error;
use urbanlog_core::{gateways::geoloc::GeolocationError, usecases::Error as UsecaseError};

/// Failures as they are surfaced to the user interface, grouped by the
/// interaction that triggered them. None of them are retried; a failed
/// fetch keeps the previously displayed data, a failed submit keeps the
/// composer populated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sign-in failed: {0}")]
    Auth(#[source] UsecaseError),
    #[error("Loading requests failed: {0}")]
    Retrieval(#[source] UsecaseError),
    #[error("Saving changes failed: {0}")]
    Write(#[source] UsecaseError),
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

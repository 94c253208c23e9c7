use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported on this device")]
    Unsupported,
    #[error("Permission to read the device position was denied")]
    PermissionDenied,
    #[error("The device position is currently unavailable")]
    Unavailable,
}

pub trait GeolocationGateway {
    /// One-shot position lookup; no continuous tracking.
    fn current_position(&self) -> Result<MapPoint, GeolocationError>;
}

use urbanlog_core::gateways::geoloc::GeolocationGateway;

use super::*;

/// Stores a new request submitted through the composer.
pub fn create_request(
    connections: &sqlite::Connections,
    new_request: usecases::NewRequest,
) -> Result<Request> {
    let request = connections
        .exclusive()?
        .transaction(|conn| usecases::create_request(conn, new_request))
        .map_err(|err| {
            warn!("Failed to create request: {err}");
            AppError::Write(err)
        })?;
    info!("Created request {}", request.id);
    Ok(request)
}

/// One-shot device position lookup for the "report here" shortcut.
pub fn current_position(geoloc: &dyn GeolocationGateway) -> Result<MapPoint> {
    Ok(geoloc.current_position()?)
}

use super::*;

/// Loads the requests visible in the current viewport, annotated with
/// their vote tallies and the querying user's own votes.
pub fn query_visible(
    connections: &sqlite::Connections,
    query: usecases::VisibleRequestsQuery,
) -> Result<Vec<usecases::RequestSummary>> {
    let connection = connections.shared()?;
    usecases::query_requests(&connection, &query).map_err(|err| {
        warn!("Failed to load visible requests: {err}");
        AppError::Retrieval(err)
    })
}

/// Resolves a request id carried in a share link to the single request
/// the map should fly to.
pub fn focus_request(
    connections: &sqlite::Connections,
    id: &Id,
) -> Result<usecases::RequestSummary> {
    let connection = connections.shared()?;
    usecases::summarize_request(&connection, id).map_err(|err| {
        warn!("Failed to resolve shared request {id}: {err}");
        AppError::Retrieval(err)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn visible_requests_follow_the_viewport() {
        let fixture = BackendFixture::new();
        let alice = fixture.sign_in("alice@example.com");
        let request = fixture.create_request(&alice, 45.50, -122.67);

        // A viewport around the request includes it.
        let around: MapBbox = "45.0,-123.0,46.0,-122.0".parse().unwrap();
        let visible = flows::query_visible(
            &fixture.db_connections,
            usecases::VisibleRequestsQuery {
                bbox: around,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(1, visible.len());
        assert_eq!(request.id, visible[0].request.id);

        // A viewport that excludes the point yields nothing.
        let elsewhere: MapBbox = "40.0,-75.0,41.0,-74.0".parse().unwrap();
        let visible = flows::query_visible(
            &fixture.db_connections,
            usecases::VisibleRequestsQuery {
                bbox: elsewhere,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn viewport_spanning_the_antimeridian() {
        let fixture = BackendFixture::new();
        let alice = fixture.sign_in("alice@example.com");
        let west_of_line = fixture.create_request(&alice, 10.0, 179.5);
        let east_of_line = fixture.create_request(&alice, 10.0, -179.5);
        fixture.create_request(&alice, 10.0, 0.0);

        // A box from lng 179 eastwards across the line to -179.
        let wrapping: MapBbox = "9.0,179.0,11.0,-179.0".parse().unwrap();
        let mut visible = flows::query_visible(
            &fixture.db_connections,
            usecases::VisibleRequestsQuery {
                bbox: wrapping,
                ..Default::default()
            },
        )
        .unwrap();
        visible.sort_by(|a, b| a.request.pos.lng().partial_cmp(&b.request.pos.lng()).unwrap());
        let ids: Vec<_> = visible.iter().map(|s| s.request.id.clone()).collect();
        assert_eq!(vec![east_of_line.id, west_of_line.id], ids);

        // The mirror box between the same longitudes does not wrap and
        // only sees the request at the prime meridian.
        let inner: MapBbox = "9.0,-179.0,11.0,179.0".parse().unwrap();
        let visible = flows::query_visible(
            &fixture.db_connections,
            usecases::VisibleRequestsQuery {
                bbox: inner,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(1, visible.len());
        assert_eq!(0.0, visible[0].request.pos.lng().to_deg());
    }

    #[test]
    fn focus_request_resolves_share_links() {
        let fixture = BackendFixture::new();
        let alice = fixture.sign_in("alice@example.com");
        let bob = fixture.sign_in("bob@example.com");
        let request = fixture.create_request(&alice, 45.50, -122.67);
        flows::cast_vote(
            &fixture.db_connections,
            &bob.user_id,
            &request.id,
            VoteType::Up,
        )
        .unwrap();

        let summary = flows::focus_request(&fixture.db_connections, &request.id).unwrap();
        assert_eq!(request.id, summary.request.id);
        assert_eq!(1, summary.tally.upvotes);

        let missing = flows::focus_request(&fixture.db_connections, &"missing".into());
        assert!(matches!(missing, Err(AppError::Retrieval(_))));
    }
}

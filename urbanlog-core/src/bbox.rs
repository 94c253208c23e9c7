use crate::entities::{MapBbox, Request};

pub trait InBbox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBbox for Request {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use urbanlog_entities::{builders::*, geo::MapPoint};

    use super::*;

    #[test]
    fn is_in_bounding_box() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        let request = Request::build()
            .pos(MapPoint::from_lat_lng_deg(5.0, 5.0))
            .finish();
        assert!(request.in_bbox(&bbox));
        let request = Request::build()
            .pos(MapPoint::from_lat_lng_deg(10.1, 10.0))
            .finish();
        assert!(!request.in_bbox(&bbox));
    }

    #[test]
    fn filter_by_bounding_box() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        let requests = [
            Request::build()
                .pos(MapPoint::from_lat_lng_deg(5.0, 5.0))
                .finish(),
            Request::build()
                .pos(MapPoint::from_lat_lng_deg(-5.0, 5.0))
                .finish(),
            Request::build()
                .pos(MapPoint::from_lat_lng_deg(10.0, 10.1))
                .finish(),
        ];
        assert_eq!(requests.iter().filter(|r| r.in_bbox(&bbox)).count(), 2);
    }
}

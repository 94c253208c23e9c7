use std::collections::{HashMap, HashSet};

use super::prelude::*;
use crate::{bbox::InBbox as _, tally::Tallied as _, util::validate};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Most recently created first.
    #[default]
    Newest,
    /// Highest score first, newest first among equal scores.
    Votes,
}

/// Parameters of a viewport-filtered retrieval.
///
/// The bounding box is mandatory: callers without a viewport must not
/// issue a query at all. Subcategory filters only take effect while a
/// category filter is active.
#[derive(Debug, Clone, Default)]
pub struct VisibleRequestsQuery {
    pub bbox: MapBbox,
    pub category: Option<Category>,
    pub subcategories: HashSet<String>,
    pub sort_by: SortBy,
    pub user_id: Option<Id>,
}

/// A request together with its derived read-time fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSummary {
    pub request: Request,
    pub tally: VoteTally,
    pub own_vote: Option<VoteType>,
}

impl RequestSummary {
    pub fn score(&self) -> i64 {
        self.tally.score()
    }
}

pub fn query_requests<R>(repo: &R, query: &VisibleRequestsQuery) -> Result<Vec<RequestSummary>>
where
    R: RequestRepo + VoteRepo,
{
    if !validate::is_valid_bbox(&query.bbox) {
        return Err(Error::Bbox);
    }

    let mut requests = repo.requests_in_bbox(&query.bbox)?;
    debug_assert!(requests.iter().all(|r| r.in_bbox(&query.bbox)));

    if let Some(category) = query.category {
        requests.retain(|r| r.category == category);
        if !query.subcategories.is_empty() {
            requests.retain(|r| query.subcategories.contains(&r.subcategory));
        }
    }

    // Individual vote rows stay private to this function: only the
    // aggregate tallies and the querying user's own vote leave it.
    let votes = {
        let ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        repo.load_votes_of_requests(&ids)?
    };
    let mut votes_by_request: HashMap<Id, Vec<Vote>> = HashMap::new();
    for vote in votes {
        votes_by_request
            .entry(vote.request_id.clone())
            .or_default()
            .push(vote);
    }

    let own_votes: HashMap<Id, VoteType> = match &query.user_id {
        Some(user_id) => {
            let ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
            repo.load_votes_of_user(user_id.as_str(), &ids)?
                .into_iter()
                .map(|v| (v.request_id, v.vote_type))
                .collect()
        }
        None => HashMap::new(),
    };

    let mut summaries: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let tally = votes_by_request
                .get(&request.id)
                .map(|votes| request.tally(votes))
                .unwrap_or_default();
            let own_vote = own_votes.get(&request.id).copied();
            RequestSummary {
                request,
                tally,
                own_vote,
            }
        })
        .collect();

    match query.sort_by {
        SortBy::Newest => {
            summaries.sort_by(|a, b| b.request.created_at.cmp(&a.request.created_at));
        }
        SortBy::Votes => {
            summaries.sort_by(|a, b| {
                b.score()
                    .cmp(&a.score())
                    .then_with(|| b.request.created_at.cmp(&a.request.created_at))
            });
        }
    }

    Ok(summaries)
}

/// Loads a single request by id together with its tally.
///
/// Used for share links that point at a request regardless of the
/// current viewport. No own-vote annotation; the map selects the
/// request from the visible list once it has flown there.
pub fn summarize_request<R>(repo: &R, id: &Id) -> Result<RequestSummary>
where
    R: RequestRepo + VoteRepo,
{
    let request = repo.get_request(id.as_str())?;
    let votes = repo.load_votes_of_requests(&[id.as_str()])?;
    let tally = request.tally(&votes);
    Ok(RequestSummary {
        request,
        tally,
        own_vote: None,
    })
}

#[cfg(test)]
mod tests {
    use urbanlog_entities::builders::*;

    use super::{super::tests::MockDb, *};

    fn bbox(sw_lat: f64, sw_lng: f64, ne_lat: f64, ne_lng: f64) -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(sw_lat, sw_lng),
            MapPoint::from_lat_lng_deg(ne_lat, ne_lng),
        )
    }

    fn query_in(b: MapBbox) -> VisibleRequestsQuery {
        VisibleRequestsQuery {
            bbox: b,
            ..Default::default()
        }
    }

    #[test]
    fn reject_invalid_bbox() {
        let db = MockDb::default();
        let query = VisibleRequestsQuery::default();
        assert!(matches!(query_requests(&db, &query), Err(Error::Bbox)));
    }

    #[test]
    fn only_requests_within_bounds() {
        let db = MockDb::default();
        db.requests.borrow_mut().push(
            Request::build()
                .id("inside")
                .pos(MapPoint::from_lat_lng_deg(45.5, -122.5))
                .finish(),
        );
        db.requests.borrow_mut().push(
            Request::build()
                .id("outside")
                .pos(MapPoint::from_lat_lng_deg(47.0, -122.5))
                .finish(),
        );
        let visible = query_requests(&db, &query_in(bbox(45.0, -123.0, 46.0, -122.0))).unwrap();
        assert_eq!(1, visible.len());
        assert_eq!(Id::from("inside"), visible[0].request.id);
    }

    #[test]
    fn subcategory_filters_ignored_without_category_filter() {
        let db = MockDb::default();
        db.requests.borrow_mut().push(
            Request::build()
                .id("a")
                .pos(MapPoint::from_lat_lng_deg(45.5, -122.5))
                .category(Category::Safety)
                .subcategory("Crosswalk needed")
                .finish(),
        );
        db.requests.borrow_mut().push(
            Request::build()
                .id("b")
                .pos(MapPoint::from_lat_lng_deg(45.5, -122.5))
                .category(Category::Transit)
                .finish(),
        );
        let mut query = query_in(bbox(45.0, -123.0, 46.0, -122.0));
        query.subcategories = ["Bus shelter".to_owned()].into_iter().collect();
        // No category filter: the subcategory set must have no effect.
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(2, visible.len());

        query.category = Some(Category::Safety);
        query.subcategories = ["Crosswalk needed".to_owned()].into_iter().collect();
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(1, visible.len());
        assert_eq!(Id::from("a"), visible[0].request.id);
    }

    #[test]
    fn sort_newest_and_votes() {
        let db = MockDb::default();
        let inside = MapPoint::from_lat_lng_deg(45.5, -122.5);
        db.requests.borrow_mut().push(
            Request::build()
                .id("older")
                .pos(inside)
                .created_at(Timestamp::from_secs(100))
                .finish(),
        );
        db.requests.borrow_mut().push(
            Request::build()
                .id("newer")
                .pos(inside)
                .created_at(Timestamp::from_secs(200))
                .finish(),
        );
        db.votes.borrow_mut().push(
            Vote::build()
                .request_id("older")
                .user_id("voter")
                .vote_type(VoteType::Up)
                .finish(),
        );

        let query = query_in(bbox(45.0, -123.0, 46.0, -122.0));
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(Id::from("newer"), visible[0].request.id);

        let mut query = query;
        query.sort_by = SortBy::Votes;
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(Id::from("older"), visible[0].request.id);
        assert_eq!(1, visible[0].score());
    }

    #[test]
    fn summarize_single_request() {
        let db = MockDb::default();
        db.requests.borrow_mut().push(Request::build().id("r").finish());
        db.votes.borrow_mut().push(
            Vote::build()
                .request_id("r")
                .user_id("b")
                .vote_type(VoteType::Down)
                .finish(),
        );
        let summary = summarize_request(&db, &"r".into()).unwrap();
        assert_eq!(Id::from("r"), summary.request.id);
        assert_eq!(1, summary.tally.downvotes);
        assert_eq!(None, summary.own_vote);
        assert!(matches!(
            summarize_request(&db, &"missing".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn own_vote_annotation_is_per_user() {
        let db = MockDb::default();
        db.requests.borrow_mut().push(
            Request::build()
                .id("r")
                .pos(MapPoint::from_lat_lng_deg(45.5, -122.5))
                .finish(),
        );
        db.votes.borrow_mut().push(
            Vote::build()
                .request_id("r")
                .user_id("b")
                .vote_type(VoteType::Up)
                .finish(),
        );

        let mut query = query_in(bbox(45.0, -123.0, 46.0, -122.0));
        query.user_id = Some("b".into());
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(Some(VoteType::Up), visible[0].own_vote);
        assert_eq!(1, visible[0].tally.upvotes);

        query.user_id = Some("a".into());
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(None, visible[0].own_vote);
        assert_eq!(1, visible[0].tally.upvotes);

        query.user_id = None;
        let visible = query_requests(&db, &query).unwrap();
        assert_eq!(None, visible[0].own_vote);
    }
}

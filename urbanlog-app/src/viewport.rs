use std::collections::HashSet;

use urbanlog_core::{
    entities::{Category, Id, MapBbox},
    usecases::{RequestSummary, SortBy, VisibleRequestsQuery},
    util::validate,
};

/// A fetch issued by the viewport controller.
///
/// The sequence number identifies the newest fetch: completions that
/// come back carrying an older number must be dropped.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: VisibleRequestsQuery,
}

/// Drives the viewport-filtered request list of the map.
///
/// Until the first map bounds arrive nothing is fetched and the visible
/// list stays empty. From then on every change to bounds, filters, sort
/// order, or session identity issues exactly one fetch. Responses may
/// arrive out of order; only the completion matching the newest issued
/// ticket is applied, so a slow early response can never overwrite the
/// result of a later pan.
#[derive(Debug, Default)]
pub struct ViewportController {
    bounds: Option<MapBbox>,
    category: Option<Category>,
    subcategories: HashSet<String>,
    sort_by: SortBy,
    user_id: Option<Id>,
    last_issued_seq: u64,
    visible: Vec<RequestSummary>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied fetch result.
    pub fn visible(&self) -> &[RequestSummary] {
        &self.visible
    }

    pub fn bounds(&self) -> Option<&MapBbox> {
        self.bounds.as_ref()
    }

    /// Map callback: the visible area has changed.
    ///
    /// Degenerate boxes (zero area, inverted latitudes) are ignored,
    /// the previous bounds stay in effect.
    pub fn set_bounds(&mut self, bounds: MapBbox) -> Option<FetchTicket> {
        if !validate::is_valid_bbox(&bounds) {
            return None;
        }
        self.bounds = Some(bounds);
        self.issue_fetch()
    }

    /// Selecting a category clears the subcategory set.
    pub fn set_category(&mut self, category: Option<Category>) -> Option<FetchTicket> {
        self.category = category;
        self.subcategories.clear();
        self.issue_fetch()
    }

    pub fn toggle_subcategory(&mut self, subcategory: &str) -> Option<FetchTicket> {
        if !self.subcategories.remove(subcategory) {
            self.subcategories.insert(subcategory.to_owned());
        }
        self.issue_fetch()
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> Option<FetchTicket> {
        self.sort_by = sort_by;
        self.issue_fetch()
    }

    /// Session change: own-vote annotations depend on the identity.
    pub fn set_user(&mut self, user_id: Option<Id>) -> Option<FetchTicket> {
        self.user_id = user_id;
        self.issue_fetch()
    }

    /// Applies a completed fetch. Returns `false` if the completion was
    /// stale and has been dropped.
    pub fn apply_fetched(&mut self, seq: u64, summaries: Vec<RequestSummary>) -> bool {
        if seq != self.last_issued_seq {
            log::debug!(
                "Dropping stale fetch completion {seq} (newest is {})",
                self.last_issued_seq
            );
            return false;
        }
        self.visible = summaries;
        true
    }

    fn issue_fetch(&mut self) -> Option<FetchTicket> {
        // Wait for the viewport: no bounds, no fetch.
        let bbox = self.bounds?;
        self.last_issued_seq += 1;
        Some(FetchTicket {
            seq: self.last_issued_seq,
            query: VisibleRequestsQuery {
                bbox,
                category: self.category,
                subcategories: self.subcategories.clone(),
                sort_by: self.sort_by,
                user_id: self.user_id.clone(),
            },
        })
    }
}

//! Venue List View
//!
//! Pages through the venue catalogue. Pagination is a bare page counter
//! with no total-count awareness: "previous" is available exactly above
//! page 1, "next" is never bounded and may fetch an empty page.

use super::FetchState;
use crate::api::{ApiClient, Venue, VenueQuery};

/// Controller for the paged venue list.
#[derive(Debug)]
pub struct VenueListView {
    page: u32,
    pub limit: u32,
    pub sort: String,
    pub sort_order: String,
    pub state: FetchState<Vec<Venue>>,
}

impl VenueListView {
    pub fn new(limit: u32, sort: &str, sort_order: &str) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort: sort.to_string(),
            sort_order: sort_order.to_string(),
            state: FetchState::Idle,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Offset sent to the API for the current page.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    /// "Previous" is available exactly when not on the first page.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Move back one page. No-op on page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.state = FetchState::Idle;
        }
    }

    /// Move forward one page. Never bounded.
    pub fn next_page(&mut self) {
        self.page += 1;
        self.state = FetchState::Idle;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.state = FetchState::Idle;
    }

    /// Fetch the current page. The server's order is stored verbatim.
    pub async fn load(&mut self, api: &ApiClient) {
        self.state = FetchState::Loading;

        let query = VenueQuery {
            limit: self.limit,
            offset: self.offset(),
            sort: self.sort.clone(),
            sort_order: self.sort_order.clone(),
        };

        self.state = match api.list_venues(&query).await {
            Ok(venues) => FetchState::Loaded(venues),
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch venues");
                FetchState::Failed("An error occurred while fetching venues.".to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_advances_offset_by_limit() {
        let mut view = VenueListView::new(20, "created", "desc");
        assert_eq!(view.page(), 1);
        assert_eq!(view.offset(), 0);

        view.next_page();
        assert_eq!(view.page(), 2);
        assert_eq!(view.offset(), 20);
    }

    #[test]
    fn test_previous_is_disabled_exactly_on_page_one() {
        let mut view = VenueListView::new(10, "created", "desc");
        assert!(!view.has_previous());

        // No-op at the lower bound.
        view.previous_page();
        assert_eq!(view.page(), 1);

        view.next_page();
        assert!(view.has_previous());
        view.previous_page();
        assert_eq!(view.page(), 1);
        assert!(!view.has_previous());
    }

    #[test]
    fn test_page_change_resets_state() {
        let mut view = VenueListView::new(10, "created", "desc");
        view.state = FetchState::Loaded(vec![]);

        view.next_page();
        assert_eq!(view.state, FetchState::Idle);
    }

    #[test]
    fn test_set_page_clamps_to_one() {
        let mut view = VenueListView::new(10, "created", "desc");
        view.set_page(0);
        assert_eq!(view.page(), 1);
    }
}

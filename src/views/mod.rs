//! View Controllers
//!
//! Each view owns its local state (form fields, fetch state, error message)
//! and drives gateway calls, reconciling responses into that state. Errors
//! never propagate past a view: every failure becomes a local error string,
//! and a failure in one fetch never blocks a sibling fetch.

mod auth;
mod create_venue;
mod profile;
mod venue_detail;
mod venue_list;

pub use auth::AuthView;
pub use create_venue::{CreateVenueView, VenueForm};
pub use profile::{booking_update, BookingEdit, ProfileView};
pub use venue_detail::VenueDetailView;
pub use venue_list::VenueListView;

/// Lifecycle of a single fetch.
///
/// Replaces the loading/error/data flag triad so impossible combinations
/// (error and data at once) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_accessors() {
        let state: FetchState<u32> = FetchState::Idle;
        assert!(!state.is_loading());
        assert_eq!(state.loaded(), None);
        assert_eq!(state.error(), None);

        let state = FetchState::Loaded(7u32);
        assert_eq!(state.loaded(), Some(&7));
        assert_eq!(state.error(), None);

        let state: FetchState<u32> = FetchState::Failed("boom".to_string());
        assert_eq!(state.loaded(), None);
        assert_eq!(state.error(), Some("boom"));
    }
}

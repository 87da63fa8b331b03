//! Profile View
//!
//! Three independent fetches (profile, owned venues, own bookings), each
//! with its own fetch state; a failure in one never cancels the others.
//! Booking edits send a minimal payload and skip the network entirely when
//! nothing changed.

use super::FetchState;
use crate::api::{ApiClient, Booking, BookingUpdate, Profile, Venue};

/// Raw edit fields for a booking; blank means "unchanged".
#[derive(Debug, Clone, Default)]
pub struct BookingEdit {
    pub date_from: String,
    pub date_to: String,
    pub guests: String,
}

/// Compute the minimal update payload for a booking edit.
///
/// Dates are included (as a pair) only when at least one differs from the
/// original. `guests` is always included, falling back to the original when
/// the edit field is blank or unparsable. Returns `None` when the recomputed
/// payload is identical to the original, in which case no request is issued.
pub fn booking_update(original: &Booking, edit: &BookingEdit) -> Option<BookingUpdate> {
    let date_from = (!edit.date_from.is_empty() && edit.date_from != original.date_from)
        .then(|| edit.date_from.clone());
    let date_to = (!edit.date_to.is_empty() && edit.date_to != original.date_to)
        .then(|| edit.date_to.clone());
    let dates_changed = date_from.is_some() || date_to.is_some();

    let guests = if edit.guests.is_empty() {
        original.guests
    } else {
        edit.guests.parse().unwrap_or(original.guests)
    };

    if !dates_changed && guests == original.guests {
        return None;
    }

    Some(BookingUpdate {
        date_from: dates_changed
            .then(|| date_from.unwrap_or_else(|| original.date_from.clone())),
        date_to: dates_changed.then(|| date_to.unwrap_or_else(|| original.date_to.clone())),
        guests,
    })
}

/// Controller for the profile view.
#[derive(Debug)]
pub struct ProfileView {
    name: String,
    pub profile: FetchState<Profile>,
    pub venues: FetchState<Vec<Venue>>,
    pub bookings: FetchState<Vec<Booking>>,
    pub error: Option<String>,
}

impl ProfileView {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            profile: FetchState::Idle,
            venues: FetchState::Idle,
            bookings: FetchState::Idle,
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Issue the three fetches. No ordering dependency between them, and
    /// each reports failure through its own state.
    pub async fn load(&mut self, api: &ApiClient) {
        self.profile = FetchState::Loading;
        self.venues = FetchState::Loading;
        self.bookings = FetchState::Loading;

        let (profile, venues, bookings) = tokio::join!(
            api.get_profile(&self.name),
            api.profile_venues(&self.name),
            api.profile_bookings(&self.name),
        );

        self.profile = match profile {
            Ok(p) => FetchState::Loaded(p),
            Err(e) => {
                tracing::error!(error = %e, name = %self.name, "Failed to fetch profile");
                FetchState::Failed("An error occurred while fetching profile.".to_string())
            }
        };
        self.venues = match venues {
            Ok(v) => FetchState::Loaded(v),
            Err(e) => {
                tracing::error!(error = %e, name = %self.name, "Failed to fetch venues");
                FetchState::Failed("An error occurred while fetching your venues.".to_string())
            }
        };
        self.bookings = match bookings {
            Ok(b) => FetchState::Loaded(b),
            Err(e) => {
                tracing::error!(error = %e, name = %self.name, "Failed to fetch bookings");
                FetchState::Failed("An error occurred while fetching your bookings.".to_string())
            }
        };
    }

    /// Edit one of the user's bookings with a minimal-diff payload. Skips
    /// the network call when nothing changed. On success the booking is
    /// replaced in local state with the server's response.
    pub async fn edit_booking(&mut self, api: &ApiClient, id: &str, edit: &BookingEdit) -> bool {
        self.error = None;

        let Some(original) = self
            .bookings
            .loaded()
            .and_then(|bookings| bookings.iter().find(|b| b.id == id))
            .cloned()
        else {
            self.error = Some("Booking not found.".to_string());
            return false;
        };

        let Some(payload) = booking_update(&original, edit) else {
            // Nothing changed, no request issued.
            return true;
        };

        match api.update_booking(id, &payload).await {
            Ok(updated) => {
                self.replace_booking(updated);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, booking_id = %id, "Failed to update booking");
                self.error = Some("An error occurred while updating the booking.".to_string());
                false
            }
        }
    }

    /// Cancel a booking. Removed from local state only after the server
    /// confirms the deletion.
    pub async fn delete_booking(&mut self, api: &ApiClient, id: &str) -> bool {
        self.error = None;

        match api.delete_booking(id).await {
            Ok(()) => {
                self.remove_booking(id);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, booking_id = %id, "Failed to cancel booking");
                self.error = Some("An error occurred while cancelling the booking.".to_string());
                false
            }
        }
    }

    /// Toggle the venue-manager flag. The whole local profile snapshot is
    /// replaced with the server's response.
    pub async fn set_venue_manager(&mut self, api: &ApiClient, venue_manager: bool) -> bool {
        self.error = None;

        match api.update_venue_manager(&self.name, venue_manager).await {
            Ok(profile) => {
                self.profile = FetchState::Loaded(profile);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name = %self.name, "Failed to update venue-manager flag");
                self.error = Some("An error occurred while updating profile.".to_string());
                false
            }
        }
    }

    /// Update the avatar URL. The whole local profile snapshot is replaced
    /// with the server's response.
    pub async fn set_avatar(&mut self, api: &ApiClient, avatar: &str) -> bool {
        self.error = None;

        match api.update_avatar(&self.name, avatar).await {
            Ok(profile) => {
                self.profile = FetchState::Loaded(profile);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, name = %self.name, "Failed to update avatar");
                self.error = Some("An error occurred while updating avatar.".to_string());
                false
            }
        }
    }

    fn replace_booking(&mut self, updated: Booking) {
        if let FetchState::Loaded(bookings) = &mut self.bookings {
            if let Some(slot) = bookings.iter_mut().find(|b| b.id == updated.id) {
                *slot = updated;
            }
        }
    }

    fn remove_booking(&mut self, id: &str) {
        if let FetchState::Loaded(bookings) = &mut self.bookings {
            bookings.retain(|b| b.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Booking {
        serde_json::from_str(
            r#"{"id":"b1","dateFrom":"2024-01-01","dateTo":"2024-01-05","guests":2}"#,
        )
        .unwrap()
    }

    fn edit(from: &str, to: &str, guests: &str) -> BookingEdit {
        BookingEdit {
            date_from: from.to_string(),
            date_to: to.to_string(),
            guests: guests.to_string(),
        }
    }

    #[test]
    fn test_all_blank_edit_issues_no_update() {
        assert_eq!(booking_update(&original(), &edit("", "", "")), None);
    }

    #[test]
    fn test_unchanged_values_issue_no_update() {
        // Re-typing the original values is not a change.
        assert_eq!(
            booking_update(&original(), &edit("2024-01-01", "2024-01-05", "2")),
            None
        );
    }

    #[test]
    fn test_guests_only_change_omits_dates() {
        let update = booking_update(&original(), &edit("", "", "3")).unwrap();
        assert_eq!(update.date_from, None);
        assert_eq!(update.date_to, None);
        assert_eq!(update.guests, 3);
    }

    #[test]
    fn test_one_changed_date_sends_both_dates() {
        let update = booking_update(&original(), &edit("2024-01-02", "", "")).unwrap();
        assert_eq!(update.date_from.as_deref(), Some("2024-01-02"));
        assert_eq!(update.date_to.as_deref(), Some("2024-01-05"));
        assert_eq!(update.guests, 2);
    }

    #[test]
    fn test_unparsable_guests_falls_back_to_original() {
        assert_eq!(booking_update(&original(), &edit("", "", "many")), None);

        let update = booking_update(&original(), &edit("2024-01-02", "", "many")).unwrap();
        assert_eq!(update.guests, 2);
    }

    #[test]
    fn test_replace_and_remove_booking() {
        let mut view = ProfileView::new("alice");
        view.bookings = FetchState::Loaded(vec![original()]);

        let updated: Booking = serde_json::from_str(
            r#"{"id":"b1","dateFrom":"2024-03-01","dateTo":"2024-03-02","guests":4}"#,
        )
        .unwrap();
        view.replace_booking(updated);
        assert_eq!(view.bookings.loaded().unwrap()[0].guests, 4);

        view.remove_booking("b1");
        assert!(view.bookings.loaded().unwrap().is_empty());
    }
}

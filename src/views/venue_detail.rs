//! Venue Detail / Edit View
//!
//! Fetches a venue by id, follows up with its newest booking, and handles
//! the full-snapshot edit, the confirmation-free delete, and the booking
//! sub-form. Mutations overwrite the local copy wholesale with the server's
//! response.

use super::FetchState;
use crate::api::{ApiClient, Booking, BookingPayload, Venue, VenuePayload};

/// Controller for a single venue's detail view.
#[derive(Debug)]
pub struct VenueDetailView {
    venue_id: String,
    pub state: FetchState<Venue>,
    /// First booking embedded in the venue, fetched separately as "newest".
    pub newest_booking: Option<Booking>,
    /// Pending media URL, appended to the snapshot on the next update.
    pub new_image: String,
    pub error: Option<String>,
}

impl VenueDetailView {
    pub fn new(venue_id: &str) -> Self {
        Self {
            venue_id: venue_id.to_string(),
            state: FetchState::Idle,
            newest_booking: None,
            new_image: String::new(),
            error: None,
        }
    }

    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    /// Fetch the venue, then its newest booking when the embedded list is
    /// non-empty.
    pub async fn load(&mut self, api: &ApiClient) {
        self.state = FetchState::Loading;
        self.newest_booking = None;

        let venue = match api.get_venue(&self.venue_id).await {
            Ok(venue) => venue,
            Err(e) => {
                tracing::error!(error = %e, venue_id = %self.venue_id, "Failed to fetch venue");
                self.state = FetchState::Failed("An error occurred while fetching data.".to_string());
                return;
            }
        };

        if let Some(first) = venue.bookings.first() {
            match api.get_booking(&first.id).await {
                Ok(booking) => self.newest_booking = Some(booking),
                Err(e) => {
                    tracing::error!(error = %e, booking_id = %first.id, "Failed to fetch newest booking");
                    self.state =
                        FetchState::Failed("An error occurred while fetching data.".to_string());
                    return;
                }
            }
        }

        self.state = FetchState::Loaded(venue);
    }

    /// Apply a form edit to the local snapshot before an update.
    pub fn edit<F: FnOnce(&mut Venue)>(&mut self, f: F) {
        if let FetchState::Loaded(venue) = &mut self.state {
            f(venue);
        }
    }

    /// The full-snapshot payload for the next update, with the pending
    /// media URL appended when set. `None` when no venue is loaded.
    pub fn pending_payload(&self) -> Option<VenuePayload> {
        let venue = self.state.loaded()?;
        let mut payload = venue.to_payload();
        if !self.new_image.is_empty() {
            payload.media.push(self.new_image.clone());
        }
        Some(payload)
    }

    /// PUT the full snapshot. On success the local venue is replaced
    /// wholesale with the server's response.
    pub async fn update(&mut self, api: &ApiClient) -> bool {
        self.error = None;

        let Some(payload) = self.pending_payload() else {
            self.error = Some("No venue loaded.".to_string());
            return false;
        };

        match api.update_venue(&self.venue_id, &payload).await {
            Ok(updated) => {
                self.state = FetchState::Loaded(updated);
                self.new_image.clear();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, venue_id = %self.venue_id, "Failed to update venue");
                self.error = Some(
                    "An error occurred while updating venue. Make sure this is your venue!"
                        .to_string(),
                );
                false
            }
        }
    }

    /// DELETE the venue, without confirmation. The caller returns to the
    /// home route on success; any late in-flight edit result is discarded.
    pub async fn delete(&mut self, api: &ApiClient) -> bool {
        self.error = None;

        match api.delete_venue(&self.venue_id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, venue_id = %self.venue_id, "Failed to delete venue");
                self.error = Some("An error occurred while deleting venue.".to_string());
                false
            }
        }
    }

    /// Book this venue. The server's booking is appended to the local list
    /// without a re-fetch.
    pub async fn book(
        &mut self,
        api: &ApiClient,
        date_from: &str,
        date_to: &str,
        guests: u32,
    ) -> bool {
        self.error = None;

        let payload = BookingPayload {
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
            guests,
            venue_id: self.venue_id.clone(),
        };

        match api.create_booking(&payload).await {
            Ok(booking) => {
                self.append_booking(booking);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, venue_id = %self.venue_id, "Failed to create booking");
                self.error = Some("An error occurred while creating the booking.".to_string());
                false
            }
        }
    }

    fn append_booking(&mut self, booking: Booking) {
        if let FetchState::Loaded(venue) = &mut self.state {
            venue.bookings.push(booking);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_venue() -> Venue {
        serde_json::from_str(
            r#"{
                "id": "v1",
                "name": "Cabin",
                "description": "A cabin",
                "media": ["https://example.com/a.jpg"],
                "price": 120.0,
                "maxGuests": 4
            }"#,
        )
        .unwrap()
    }

    fn sample_booking(id: &str) -> Booking {
        serde_json::from_str(&format!(
            r#"{{"id":"{}","dateFrom":"2024-02-01","dateTo":"2024-02-03","guests":2}}"#,
            id
        ))
        .unwrap()
    }

    #[test]
    fn test_pending_payload_appends_new_image() {
        let mut view = VenueDetailView::new("v1");
        view.state = FetchState::Loaded(sample_venue());

        let payload = view.pending_payload().unwrap();
        assert_eq!(payload.media, vec!["https://example.com/a.jpg"]);

        view.new_image = "https://example.com/b.jpg".to_string();
        let payload = view.pending_payload().unwrap();
        assert_eq!(
            payload.media,
            vec!["https://example.com/a.jpg", "https://example.com/b.jpg"]
        );

        // The snapshot itself is untouched until the server confirms.
        assert_eq!(view.state.loaded().unwrap().media.len(), 1);
    }

    #[test]
    fn test_pending_payload_requires_loaded_venue() {
        let view = VenueDetailView::new("v1");
        assert!(view.pending_payload().is_none());
    }

    #[test]
    fn test_booking_appended_without_refetch() {
        let mut view = VenueDetailView::new("v1");
        view.state = FetchState::Loaded(sample_venue());

        view.append_booking(sample_booking("b1"));
        view.append_booking(sample_booking("b2"));

        let venue = view.state.loaded().unwrap();
        assert_eq!(venue.bookings.len(), 2);
        assert_eq!(venue.bookings[1].id, "b2");
    }

    #[test]
    fn test_edit_mutates_loaded_snapshot_only() {
        let mut view = VenueDetailView::new("v1");
        view.edit(|v| v.name = "ignored".to_string());
        assert!(view.state.loaded().is_none());

        view.state = FetchState::Loaded(sample_venue());
        view.edit(|v| v.name = "Renamed".to_string());
        assert_eq!(view.state.loaded().unwrap().name, "Renamed");
    }
}

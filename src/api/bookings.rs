//! Booking endpoints.

use super::dto::{Booking, BookingPayload, BookingUpdate};
use super::{ApiClient, ApiResult};

impl ApiClient {
    /// GET /bookings, optionally filtered to one venue. Requires a token.
    pub async fn list_bookings(&self, venue_id: Option<&str>) -> ApiResult<Vec<Booking>> {
        let token = self.bearer()?;
        let mut request = self.http.get(self.url("/bookings")).bearer_auth(token);
        if let Some(id) = venue_id {
            request = request.query(&[("venueId", id)]);
        }
        self.send_json(request, "fetching bookings").await
    }

    /// GET /bookings/{id}. Public endpoint.
    pub async fn get_booking(&self, id: &str) -> ApiResult<Booking> {
        let request = self
            .http
            .get(self.url(&format!("/bookings/{}", urlencoding::encode(id))));
        self.send_json(request, "fetching the booking").await
    }

    /// POST /bookings, tagged with the venue id. Requires a token.
    pub async fn create_booking(&self, payload: &BookingPayload) -> ApiResult<Booking> {
        let token = self.bearer()?;
        let request = self
            .http
            .post(self.url("/bookings"))
            .bearer_auth(token)
            .json(payload);
        self.send_json(request, "creating the booking").await
    }

    /// PUT /bookings/{id} with a minimal payload. Requires a token.
    pub async fn update_booking(&self, id: &str, update: &BookingUpdate) -> ApiResult<Booking> {
        let token = self.bearer()?;
        let request = self
            .http
            .put(self.url(&format!("/bookings/{}", urlencoding::encode(id))))
            .bearer_auth(token)
            .json(update);
        self.send_json(request, "updating the booking").await
    }

    /// DELETE /bookings/{id}. Requires a token.
    pub async fn delete_booking(&self, id: &str) -> ApiResult<()> {
        let token = self.bearer()?;
        let request = self
            .http
            .delete(self.url(&format!("/bookings/{}", urlencoding::encode(id))))
            .bearer_auth(token);
        self.send_empty(request, "cancelling the booking").await
    }
}

//! Venue endpoints.

use super::dto::{Venue, VenuePayload};
use super::{ApiClient, ApiResult};

/// Query parameters for the venue list.
#[derive(Debug, Clone)]
pub struct VenueQuery {
    pub limit: u32,
    pub offset: u32,
    pub sort: String,
    pub sort_order: String,
}

impl Default for VenueQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            sort: "created".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

impl ApiClient {
    /// GET /venues with paging and sort parameters. Public endpoint. The
    /// returned order is the server's; callers must not re-sort.
    pub async fn list_venues(&self, query: &VenueQuery) -> ApiResult<Vec<Venue>> {
        let request = self.http.get(self.url("/venues")).query(&[
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
            ("sort", query.sort.clone()),
            ("sortOrder", query.sort_order.clone()),
        ]);
        self.send_json(request, "fetching venues").await
    }

    /// GET /venues/{id}, with the venue's bookings embedded.
    pub async fn get_venue(&self, id: &str) -> ApiResult<Venue> {
        let request = self
            .http
            .get(self.url(&format!("/venues/{}", urlencoding::encode(id))))
            .query(&[("_bookings", "true")]);
        self.send_json(request, "fetching the venue").await
    }

    /// POST /venues. Requires a token.
    pub async fn create_venue(&self, payload: &VenuePayload) -> ApiResult<Venue> {
        let token = self.bearer()?;
        let request = self
            .http
            .post(self.url("/venues"))
            .bearer_auth(token)
            .json(payload);
        self.send_json(request, "creating the venue").await
    }

    /// PUT /venues/{id} with a full-venue snapshot. Requires a token;
    /// ownership is enforced server-side.
    pub async fn update_venue(&self, id: &str, payload: &VenuePayload) -> ApiResult<Venue> {
        let token = self.bearer()?;
        let request = self
            .http
            .put(self.url(&format!("/venues/{}", urlencoding::encode(id))))
            .bearer_auth(token)
            .json(payload);
        self.send_json(request, "updating the venue").await
    }

    /// DELETE /venues/{id}. Requires a token. Irrevocable.
    pub async fn delete_venue(&self, id: &str) -> ApiResult<()> {
        let token = self.bearer()?;
        let request = self
            .http
            .delete(self.url(&format!("/venues/{}", urlencoding::encode(id))))
            .bearer_auth(token);
        self.send_empty(request, "deleting the venue").await
    }
}

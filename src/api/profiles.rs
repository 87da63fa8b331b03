//! Profile endpoints.
//!
//! Profile names come from user input and appear as path segments, so they
//! are percent-encoded.

use super::dto::{Booking, Profile, Venue};
use super::{ApiClient, ApiResult};

impl ApiClient {
    fn profile_url(&self, name: &str, suffix: &str) -> String {
        self.url(&format!("/profiles/{}{}", urlencoding::encode(name), suffix))
    }

    /// GET /profiles/{name}. Requires a token.
    pub async fn get_profile(&self, name: &str) -> ApiResult<Profile> {
        let token = self.bearer()?;
        let request = self.http.get(self.profile_url(name, "")).bearer_auth(token);
        self.send_json(request, "fetching profile").await
    }

    /// PUT /profiles/{name} toggling the venue-manager flag. Requires a
    /// token. Returns the full updated profile.
    pub async fn update_venue_manager(&self, name: &str, venue_manager: bool) -> ApiResult<Profile> {
        let token = self.bearer()?;
        let request = self
            .http
            .put(self.profile_url(name, ""))
            .bearer_auth(token)
            .json(&serde_json::json!({ "venueManager": venue_manager }));
        self.send_json(request, "updating profile").await
    }

    /// PUT /profiles/{name}/media replacing the avatar URL. Requires a
    /// token. Returns the full updated profile.
    pub async fn update_avatar(&self, name: &str, avatar: &str) -> ApiResult<Profile> {
        let token = self.bearer()?;
        let request = self
            .http
            .put(self.profile_url(name, "/media"))
            .bearer_auth(token)
            .json(&serde_json::json!({ "avatar": avatar }));
        self.send_json(request, "updating avatar").await
    }

    /// GET /profiles/{name}/venues. Requires a token.
    pub async fn profile_venues(&self, name: &str) -> ApiResult<Vec<Venue>> {
        let token = self.bearer()?;
        let request = self
            .http
            .get(self.profile_url(name, "/venues"))
            .bearer_auth(token);
        self.send_json(request, "fetching your venues").await
    }

    /// GET /profiles/{name}/bookings. Requires a token.
    pub async fn profile_bookings(&self, name: &str) -> ApiResult<Vec<Booking>> {
        let token = self.bearer()?;
        let request = self
            .http
            .get(self.profile_url(name, "/bookings"))
            .bearer_auth(token);
        self.send_json(request, "fetching your bookings").await
    }
}

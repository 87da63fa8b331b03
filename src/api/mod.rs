//! Holidaze API Gateway
//!
//! One-shot request/response calls against the Holidaze REST API. Each call
//! issues exactly one HTTP request (no retries, no backoff), attaches the
//! bearer token when the endpoint requires it, and reduces failures to a
//! generic per-action message. The original status and body are logged,
//! never surfaced to the user.

mod auth;
mod bookings;
mod dto;
mod error;
mod profiles;
mod venues;

pub use dto::{
    AuthResponse, Booking, BookingPayload, BookingUpdate, LoginRequest, Profile, ProfileCount,
    RegisterRequest, Venue, VenueLocation, VenueMeta, VenuePayload,
};
pub use error::{ApiError, ApiResult};
pub use venues::VenueQuery;

use crate::session::SessionManager;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Configuration for the gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL including the holidaze namespace.
    pub base_url: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.noroff.dev/api/v1/holidaze".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Holidaze REST API client
pub struct ApiClient {
    http: Client,
    config: GatewayConfig,
    session: Arc<SessionManager>,
}

impl ApiClient {
    /// Create a new client with the given configuration and session.
    pub fn new(config: GatewayConfig, session: Arc<SessionManager>) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            config,
            session,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Bearer token for protected calls. Fails before any network
    /// round-trip when no session is stored.
    fn bearer(&self) -> ApiResult<String> {
        self.session.token().ok_or(ApiError::NotAuthenticated)
    }

    /// Issue a request and decode the JSON body. `action` names the
    /// operation for the user-facing error message ("fetching venues").
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> ApiResult<T> {
        let response = self.send(request, action).await?;

        response.json::<T>().await.map_err(|e| {
            tracing::error!(action, error = %e, "Response body did not match the expected shape");
            ApiError::Malformed(format!("unexpected response shape while {}", action))
        })
    }

    /// Issue a request where the response body is not needed (DELETE).
    async fn send_empty(&self, request: RequestBuilder, action: &str) -> ApiResult<()> {
        self.send(request, action).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(action, error = %e, "Request failed to complete");
            ApiError::RequestFailed(format!("An error occurred while {}.", action))
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(action, %status, body, "API returned an error status");
        Err(ApiError::RequestFailed(format!(
            "An error occurred while {}.",
            action
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn logged_out_client() -> ApiClient {
        let session = Arc::new(SessionManager::new(Box::<MemoryStore>::default()).unwrap());
        // Unroutable base URL: any call that actually hits the network would
        // come back as RequestFailed, not NotAuthenticated.
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
        };
        ApiClient::new(config, session)
    }

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "https://api.noroff.dev/api/v1/holidaze");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_protected_calls_fail_fast_without_token() {
        let client = logged_out_client();

        let payload = VenuePayload {
            name: "Cabin".to_string(),
            description: "A cabin".to_string(),
            media: vec![],
            price: 10.0,
            max_guests: 2,
            rating: 0.0,
            meta: VenueMeta::default(),
            location: VenueLocation::default(),
        };

        assert!(matches!(
            client.create_venue(&payload).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.update_venue("v1", &payload).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.delete_venue("v1").await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.list_bookings(None).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.delete_booking("b1").await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.get_profile("alice").await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client.update_avatar("alice", "https://example.com/a.png").await,
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_booking_create_fails_fast_without_token() {
        let client = logged_out_client();
        let payload = BookingPayload {
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-05".to_string(),
            guests: 2,
            venue_id: "v1".to_string(),
        };

        assert!(matches!(
            client.create_booking(&payload).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(
            client
                .update_booking(
                    "b1",
                    &BookingUpdate {
                        date_from: None,
                        date_to: None,
                        guests: 3
                    }
                )
                .await,
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_generic_message() {
        let client = logged_out_client();
        // Public endpoint, so this one does reach the (closed) socket.
        let err = client.get_venue("v1").await.unwrap_err();
        match err {
            ApiError::RequestFailed(msg) => {
                assert_eq!(msg, "An error occurred while fetching the venue.")
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }
}

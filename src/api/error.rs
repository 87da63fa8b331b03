//! API Error Types
//!
//! Errors surfaced by the gateway layer. Non-2xx statuses and transport
//! failures are collapsed into a generic per-action message; the original
//! status and body are only logged.

use thiserror::Error;

/// Gateway error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// A protected call was issued without a stored token. Raised before
    /// any network round-trip.
    #[error("Authentication token not found")]
    NotAuthenticated,

    /// HTTP or transport failure, reduced to a per-action message.
    #[error("{0}")]
    RequestFailed(String),

    /// The server answered 2xx but the body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;

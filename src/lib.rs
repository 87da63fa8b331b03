//! # Holidaze
//!
//! A command-line client for the Holidaze venue booking API: authenticate,
//! browse and page through venues, and manage venues and bookings tied to
//! your account.
//!
//! All state lives on the server. The client's job is the session and CRUD
//! orchestration: read the bearer token from durable storage, attach it to
//! requests, interpret success/failure, and reconcile each view's local
//! state with the server's response.
//!
//! ## Modules
//!
//! - [`session`]: durable bearer-token session store with an injectable
//!   persistence adapter
//! - [`api`]: one-shot gateway calls per resource (auth, venues, bookings,
//!   profiles)
//! - [`views`]: per-view state controllers built on a tagged fetch state
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use holidaze::{ApiClient, GatewayConfig, MemoryStore, SessionManager, VenueListView};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(SessionManager::new(Box::<MemoryStore>::default())?);
//!     let api = ApiClient::new(GatewayConfig::default(), session);
//!
//!     let mut list = VenueListView::new(20, "created", "desc");
//!     list.load(&api).await;
//!
//!     if let Some(venues) = list.state.loaded() {
//!         println!("Fetched {} venues", venues.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod session;
pub mod views;

// Re-export top-level types for convenience
pub use api::{
    ApiClient, ApiError, ApiResult, AuthResponse, Booking, BookingPayload, BookingUpdate,
    GatewayConfig, Profile, RegisterRequest, Venue, VenueLocation, VenueMeta, VenuePayload,
    VenueQuery,
};

pub use session::{FileStore, MemoryStore, Session, SessionError, SessionManager, SessionStore};

pub use views::{
    booking_update, AuthView, BookingEdit, CreateVenueView, FetchState, ProfileView,
    VenueDetailView, VenueForm, VenueListView,
};

pub use config::{Config, ConfigError, LoggingConfig};

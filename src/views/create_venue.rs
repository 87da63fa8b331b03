//! Create Venue View
//!
//! Single form collecting the full venue shape. A 2xx response resets every
//! field to its default; on failure the entered values are kept so the user
//! can retry.

use crate::api::{ApiClient, ApiResult, Venue, VenueLocation, VenueMeta, VenuePayload};

/// Form state for creating a venue. All fields start at their zero values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueForm {
    pub name: String,
    pub description: String,
    pub media: Vec<String>,
    pub price: f64,
    pub max_guests: u32,
    pub rating: f64,
    pub meta: VenueMeta,
    pub location: VenueLocation,
}

impl VenueForm {
    /// Parse a comma-separated string into the ordered media list.
    pub fn set_media(&mut self, raw: &str) {
        self.media = raw
            .split(',')
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();
    }

    pub fn to_payload(&self) -> VenuePayload {
        VenuePayload {
            name: self.name.clone(),
            description: self.description.clone(),
            media: self.media.clone(),
            price: self.price,
            max_guests: self.max_guests,
            rating: self.rating,
            meta: self.meta.clone(),
            location: self.location.clone(),
        }
    }
}

/// Controller for the create-venue view.
#[derive(Debug, Default)]
pub struct CreateVenueView {
    pub form: VenueForm,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl CreateVenueView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form as a POST and reconcile the result.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        self.error = None;
        self.success = None;

        let result = api.create_venue(&self.form.to_payload()).await;
        self.apply(result)
    }

    /// On success, reset every field to its default; on failure keep the
    /// entered values and surface an error.
    fn apply(&mut self, result: ApiResult<Venue>) -> bool {
        match result {
            Ok(_) => {
                self.success = Some("Venue created successfully".to_string());
                self.form = VenueForm::default();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create venue");
                self.error = Some("An error occurred while creating the venue.".to_string());
                false
            }
        }
    }
}

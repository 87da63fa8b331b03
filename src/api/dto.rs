//! Data Transfer Objects
//!
//! Wire types for the Holidaze API. Field names follow the API's camelCase
//! convention via serde renames. Parsing happens at the gateway boundary,
//! so a shape mismatch surfaces as a malformed-response error instead of a
//! runtime fault deeper in a view.

use serde::{Deserialize, Serialize};

// ============================================
// AUTH DTOs
// ============================================

/// Login request body
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request body. `avatar` serializes as `null` when absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub venue_manager: bool,
}

/// Successful auth response. Only `accessToken` is required: the login
/// response carries `name`, the register response does not.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================
// VENUE DTOs
// ============================================

/// A bookable lodging listing, as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub media: Vec<String>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: VenueLocation,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    /// Embedded bookings; populated on detail responses only.
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Venue {
    /// Snapshot this venue as a write payload. Venue updates are always
    /// full-object PUTs; there are no partial venue updates.
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

/// Venue amenities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMeta {
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub pets: bool,
}

/// Venue location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// Full-venue write payload, shared by create (POST) and replace (PUT).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePayload {
    pub name: String,
    pub description: String,
    pub media: Vec<String>,
    pub price: f64,
    pub max_guests: u32,
    pub rating: f64,
    pub meta: VenueMeta,
    pub location: VenueLocation,
}

// ============================================
// BOOKING DTOs
// ============================================

/// A reservation of a venue for a date range and guest count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub venue_id: Option<String>,
}

/// New booking request, tagged with the venue it reserves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub venue_id: String,
}

/// Minimal booking update: dates are sent only when at least one changed,
/// `guests` is always sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub guests: u32,
}

// ============================================
// PROFILE DTOs
// ============================================

/// A user account record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub venue_manager: bool,
    #[serde(rename = "_count", default)]
    pub count: ProfileCount,
}

/// Venue/booking counts embedded in a profile response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileCount {
    #[serde(default)]
    pub venues: u32,
    #[serde(default)]
    pub bookings: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_name_is_optional() {
        // Later login contract: accessToken alone is a success.
        let resp: AuthResponse = serde_json::from_str(r#"{"accessToken":"t1"}"#).unwrap();
        assert_eq!(resp.access_token, "t1");
        assert_eq!(resp.name, None);

        let resp: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"t1","name":"alice"}"#).unwrap();
        assert_eq!(resp.name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_auth_response_requires_access_token() {
        let result = serde_json::from_str::<AuthResponse>(r#"{"name":"alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_venue_parses_camel_case_fields() {
        let json = r#"{
            "id": "v1",
            "name": "Cabin",
            "description": "A cabin",
            "media": ["https://example.com/a.jpg"],
            "price": 120.0,
            "maxGuests": 4,
            "rating": 4.5,
            "meta": {"wifi": true, "parking": false, "breakfast": false, "pets": true},
            "location": {"address": "Road 1", "city": "Oslo", "zip": "0001",
                         "country": "Norway", "continent": "Europe", "lat": 59.9, "lng": 10.7},
            "created": "2024-01-01T00:00:00.000Z",
            "updated": "2024-01-02T00:00:00.000Z",
            "bookings": [{"id": "b1", "dateFrom": "2024-02-01", "dateTo": "2024-02-03", "guests": 2}]
        }"#;

        let venue: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(venue.max_guests, 4);
        assert!(venue.meta.wifi);
        assert_eq!(venue.location.city, "Oslo");
        assert_eq!(venue.bookings[0].date_from, "2024-02-01");
    }

    #[test]
    fn test_venue_without_embedded_bookings() {
        // List responses do not expand bookings.
        let json = r#"{"id":"v1","name":"Cabin","description":"A cabin","price":10.0,"maxGuests":1}"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        assert!(venue.bookings.is_empty());
        assert_eq!(venue.rating, 0.0);
    }

    #[test]
    fn test_venue_payload_serializes_camel_case() {
        let venue: Venue = serde_json::from_str(
            r#"{"id":"v1","name":"Cabin","description":"A cabin","price":10.0,"maxGuests":3}"#,
        )
        .unwrap();

        let json = serde_json::to_value(venue.to_payload()).unwrap();
        assert_eq!(json["maxGuests"], 3);
        assert!(json.get("id").is_none());
        assert!(json.get("bookings").is_none());
    }

    #[test]
    fn test_booking_update_omits_unchanged_dates() {
        let update = BookingUpdate {
            date_from: None,
            date_to: None,
            guests: 2,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("dateFrom").is_none());
        assert!(json.get("dateTo").is_none());
        assert_eq!(json["guests"], 2);
    }

    #[test]
    fn test_profile_count_rename() {
        let json = r#"{
            "name": "alice",
            "email": "alice@example.com",
            "venueManager": true,
            "_count": {"venues": 3, "bookings": 7}
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.venue_manager);
        assert_eq!(profile.avatar, None);
        assert_eq!(profile.count.venues, 3);
        assert_eq!(profile.count.bookings, 7);
    }
}

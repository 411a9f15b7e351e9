use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// Placeholder for a donation field the model could not extract
pub const UNKNOWN_FIELD: &str = "unknown";

/// Placeholder for distance/duration when the lookup is skipped or fails
pub const UNKNOWN_DISTANCE: &str = "Unknown";

/// Outcome tag carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    PartialSuccess,
    Error,
}

/// A single latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(serialize_with = "serialize_degrees")]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(serialize_with = "serialize_degrees")]
    pub lng: f64,
}

/// Whole degrees are written as integers, matching how they appear in the
/// directions URL (`40`, not `40.0`).
fn serialize_degrees<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= 180.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Donor and NGO locations that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    pub donor: GeoPoint,
    pub ngo: GeoPoint,
}

/// Structured donation details pulled out of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDonation {
    pub food: String,
    pub quantity: String,
    pub expiry: String,
    pub location: String,
}

impl ExtractedDonation {
    /// All four fields set to the `unknown` sentinel
    pub fn unknown() -> Self {
        Self {
            food: UNKNOWN_FIELD.to_string(),
            quantity: UNKNOWN_FIELD.to_string(),
            expiry: UNKNOWN_FIELD.to_string(),
            location: UNKNOWN_FIELD.to_string(),
        }
    }
}

/// Human readable travel distance and duration, as formatted by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceInfo {
    pub distance: String,
    pub duration: String,
}

impl DistanceInfo {
    pub fn unknown() -> Self {
        Self {
            distance: UNKNOWN_DISTANCE.to_string(),
            duration: UNKNOWN_DISTANCE.to_string(),
        }
    }
}

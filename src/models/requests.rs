use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for `POST /route`
///
/// Every field is optional at the serde level so a missing coordinate is
/// reported as such instead of as a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub donor_lat: Option<f64>,
    #[serde(default)]
    pub donor_lng: Option<f64>,
    #[serde(default)]
    pub ngo_lat: Option<f64>,
    #[serde(default)]
    pub ngo_lng: Option<f64>,
}

impl RouteRequest {
    pub fn new(donor_lat: f64, donor_lng: f64, ngo_lat: f64, ngo_lng: f64) -> Self {
        Self {
            donor_lat: Some(donor_lat),
            donor_lng: Some(donor_lng),
            ngo_lat: Some(ngo_lat),
            ngo_lng: Some(ngo_lng),
        }
    }
}

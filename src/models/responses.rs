use serde::{Deserialize, Serialize};
use crate::models::domain::{ExtractedDonation, GeoPoint, ResponseStatus};

/// Response for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(flatten)]
    pub donation: ExtractedDonation,
    pub status: ResponseStatus,
    pub original_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response for the route endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route_url: String,
    pub distance: String,
    pub duration: String,
    pub status: ResponseStatus,
    pub coordinates: RouteCoordinates,
}

/// Echo of the validated request coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCoordinates {
    pub donor: GeoPoint,
    pub ngo: GeoPoint,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: ResponseStatus,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: ResponseStatus::Error,
        }
    }
}

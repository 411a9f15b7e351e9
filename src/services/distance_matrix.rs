use crate::config::MapsSettings;
use crate::models::{DistanceInfo, GeoPoint};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Reasons a distance lookup fell back to `Unknown`. These never reach the
/// caller; they only show up in logs.
#[derive(Debug, Error)]
pub enum DistanceMatrixError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Distance Matrix returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Distance Matrix status: {0}")]
    ProviderStatus(String),

    #[error("Route element status: {0}")]
    ElementStatus(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

/// Google Maps Distance Matrix client
///
/// Lookups degrade to `Unknown` instead of failing: without an API key no
/// request is made at all.
pub struct DistanceMatrixClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl DistanceMatrixClient {
    pub fn from_settings(settings: &MapsSettings) -> Result<Self, reqwest::Error> {
        let client = super::http_client(settings.request_timeout_secs)?;

        Ok(Self {
            endpoint: settings.distance_matrix_url.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Travel distance and duration between two points, or `Unknown` for both
    pub async fn lookup(&self, origin: GeoPoint, destination: GeoPoint) -> DistanceInfo {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("Distance lookup skipped: no Google Maps API key configured");
            return DistanceInfo::unknown();
        };

        match self.fetch(api_key, origin, destination).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!("Error getting distance info: {}", e);
                DistanceInfo::unknown()
            }
        }
    }

    async fn fetch(
        &self,
        api_key: &str,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DistanceInfo, DistanceMatrixError> {
        let origins = format!("{},{}", origin.lat, origin.lng);
        let destinations = format!("{},{}", destination.lat, destination.lng);

        tracing::debug!("Fetching distance from {} to {}", origins, destinations);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origins", origins.as_str()),
                ("destinations", destinations.as_str()),
                ("key", api_key),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DistanceMatrixError::HttpStatus(response.status().as_u16()));
        }

        let body: DistanceMatrixResponse = response
            .json()
            .await
            .map_err(|e| DistanceMatrixError::InvalidResponse(e.to_string()))?;

        if body.status != "OK" {
            return Err(DistanceMatrixError::ProviderStatus(body.status));
        }

        let element = body
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| DistanceMatrixError::InvalidResponse("Missing route element".into()))?;

        if element.status != "OK" {
            return Err(DistanceMatrixError::ElementStatus(element.status));
        }

        match (element.distance, element.duration) {
            (Some(distance), Some(duration)) => Ok(DistanceInfo {
                distance: distance.text,
                duration: duration.text,
            }),
            _ => Err(DistanceMatrixError::InvalidResponse(
                "Element is missing distance or duration".into(),
            )),
        }
    }
}

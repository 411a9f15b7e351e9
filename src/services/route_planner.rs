use crate::config::MapsSettings;
use crate::core::directions::build_route_url;
use crate::models::{CoordinatePair, ResponseStatus, RouteCoordinates, RouteResponse};
use crate::services::distance_matrix::DistanceMatrixClient;

/// Combines the directions link with the optional distance lookup
pub struct RoutePlanner {
    directions_base_url: String,
    distance: DistanceMatrixClient,
}

impl RoutePlanner {
    pub fn new(directions_base_url: String, distance: DistanceMatrixClient) -> Self {
        Self {
            directions_base_url,
            distance,
        }
    }

    pub fn from_settings(settings: &MapsSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            settings.directions_base_url.clone(),
            DistanceMatrixClient::from_settings(settings)?,
        ))
    }

    pub fn distance_configured(&self) -> bool {
        self.distance.is_configured()
    }

    /// Build the route for an already validated pair. Always succeeds; a
    /// failed distance lookup only leaves distance and duration `Unknown`.
    pub async fn plan(&self, pair: CoordinatePair) -> RouteResponse {
        let route_url = build_route_url(&self.directions_base_url, &pair);
        let info = self.distance.lookup(pair.donor, pair.ngo).await;

        RouteResponse {
            route_url,
            distance: info.distance,
            duration: info.duration,
            status: ResponseStatus::Success,
            coordinates: RouteCoordinates {
                donor: pair.donor,
                ngo: pair.ngo,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, UNKNOWN_DISTANCE};

    #[tokio::test]
    async fn test_plan_without_maps_key() {
        let planner = RoutePlanner::from_settings(&MapsSettings::default()).unwrap();
        assert!(!planner.distance_configured());

        let response = planner
            .plan(CoordinatePair {
                donor: GeoPoint::new(40.7128, -74.0060),
                ngo: GeoPoint::new(40.7589, -73.9851),
            })
            .await;

        assert_eq!(
            response.route_url,
            "https://www.google.com/maps/dir/40.7128,-74.006/40.7589,-73.9851"
        );
        assert_eq!(response.distance, UNKNOWN_DISTANCE);
        assert_eq!(response.duration, UNKNOWN_DISTANCE);
        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(response.coordinates.ngo.lng, -73.9851);
    }
}

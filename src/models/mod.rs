// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CoordinatePair, DistanceInfo, ExtractedDonation, GeoPoint, ResponseStatus, UNKNOWN_DISTANCE,
    UNKNOWN_FIELD,
};
pub use requests::{ChatRequest, RouteRequest};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, RouteCoordinates, RouteResponse};

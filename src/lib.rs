//! Food Donation API - chat, route and match endpoints for the XYLMCSCICS
//! food donation platform.
//!
//! Chat messages are turned into structured donation details by an OpenAI
//! completion, routes are Google Maps directions links with an optional
//! Distance Matrix lookup, and match statistics are fixed demo data.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_route_url, parse_completion, validate_coordinates, Extraction};
pub use error::ApiError;
pub use models::{ChatRequest, ChatResponse, ExtractedDonation, RouteRequest, RouteResponse};
pub use routes::{configure_routes, json_config, AppState};

use actix_web::{web, HttpResponse, Responder};
use crate::core::coordinates::validate_coordinates;
use crate::error::{parse_object_body, ApiError};
use crate::models::RouteRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/route")
            .route(web::get().to(route_info))
            .route(web::post().to(get_route)),
    );
}

/// Usage documentation for the route endpoint
async fn route_info() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "endpoint": "/route",
        "method": "POST",
        "description": "Generate Google Maps directions between donor and NGO coordinates",
        "required_fields": {
            "donor_lat": "Donor latitude (float, -90 to 90)",
            "donor_lng": "Donor longitude (float, -180 to 180)",
            "ngo_lat": "NGO latitude (float, -90 to 90)",
            "ngo_lng": "NGO longitude (float, -180 to 180)"
        },
        "example_request": {
            "donor_lat": 40.7128,
            "donor_lng": -74.0060,
            "ngo_lat": 40.7589,
            "ngo_lng": -73.9851
        },
        "example_response": {
            "route_url": "https://www.google.com/maps/dir/40.7128,-74.006/40.7589,-73.9851",
            "distance": "5.2 km",
            "duration": "15 mins",
            "status": "success"
        }
    }))
}

/// Directions link between donor and NGO
///
/// POST /route
///
/// Request body:
/// ```json
/// { "donor_lat": 40.7128, "donor_lng": -74.0060, "ngo_lat": 40.7589, "ngo_lng": -73.9851 }
/// ```
async fn get_route(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    let req: RouteRequest = parse_object_body(body.into_inner())?;

    let pair = validate_coordinates(&req).map_err(|e| {
        tracing::info!("Rejected route request: {:?}", e);
        ApiError::from(e)
    })?;

    let response = state.planner.plan(pair).await;

    tracing::info!(
        "Route built: {} (distance: {}, duration: {})",
        response.route_url,
        response.distance,
        response.duration
    );

    Ok(HttpResponse::Ok().json(response))
}

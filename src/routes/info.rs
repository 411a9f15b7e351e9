use actix_web::{web, HttpResponse, Responder};
use crate::models::HealthResponse;

pub const SERVICE_BANNER: &str = "XYLMCSCICS Food Donation Platform API";
pub const SERVICE_NAME: &str = "XYLMCSCICS API";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check));
}

/// Service banner and endpoint index
async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": SERVICE_BANNER,
        "endpoints": {
            "route": "/route - Get Google Maps directions between donor and NGO",
            "chat": "/chat - Process food donation messages with AI",
            "match": "/match - Donation matching statistics",
            "health": "/health - API health check",
        }
    }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

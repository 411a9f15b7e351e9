use actix_web::{http::header::ContentType, web, HttpResponse};
use crate::core::match_report::match_report;
use crate::error::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::get().to(get_match));
}

/// Static donation matching statistics
///
/// GET /match
async fn get_match() -> Result<HttpResponse, ApiError> {
    let body = serde_json::to_string(match_report()).map_err(|e| {
        tracing::error!("Failed to serialize match report: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

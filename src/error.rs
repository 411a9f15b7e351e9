//! HTTP-facing error type and JSON payload error handling.

use crate::core::coordinates::CoordinateError;
use crate::models::ErrorResponse;
use crate::services::IntentError;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Message for absent, empty or unparseable request bodies
pub const NO_JSON_DATA: &str = "No JSON data provided";

/// Errors returned by request handlers, each mapped to a status code and a
/// `{"error": ..., "status": "error"}` body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No JSON data provided")]
    NoJsonData,

    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    #[error("Missing '{0}' field")]
    MissingField(&'static str),

    #[error(transparent)]
    Coordinates(#[from] CoordinateError),

    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error("An error occurred: {0}")]
    Internal(String),
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoJsonData
            | ApiError::InvalidPayload(_)
            | ApiError::MissingField(_)
            | ApiError::Coordinates(_) => StatusCode::BAD_REQUEST,
            ApiError::Intent(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Handle JSON payload errors
///
/// Missing, empty, non-JSON or syntactically broken bodies all report
/// [`NO_JSON_DATA`]. Well-formed JSON with the wrong shape, and numbers too
/// large for an `f64`, get the serde message instead.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    let api_error = match &err {
        error::JsonPayloadError::Deserialize(e) if e.is_data() || is_number_overflow(e) => {
            ApiError::InvalidPayload(e.to_string())
        }
        _ => ApiError::NoJsonData,
    };

    api_error.into()
}

/// serde_json reports `1e400` and friends as a syntax error
fn is_number_overflow(e: &serde_json::Error) -> bool {
    e.is_syntax() && e.to_string().starts_with("number out of range")
}

/// Deserialize a request body that must be a JSON object.
///
/// `null`, arrays and scalars are treated like a missing body so that a
/// positional array can never be read as struct fields.
pub fn parse_object_body<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    match body {
        Value::Object(object) => serde_json::from_value(Value::Object(object))
            .map_err(|e| ApiError::InvalidPayload(e.to_string())),
        other => {
            tracing::info!("Rejected non-object JSON body: {}", other);
            Err(ApiError::NoJsonData)
        }
    }
}

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::error::{parse_object_body, ApiError};
use crate::models::ChatRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .route(web::get().to(chat_info))
            .route(web::post().to(chat)),
    );
}

/// Usage documentation for the chat endpoint
async fn chat_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "endpoint": "/chat",
        "method": "POST",
        "description": "Process food donation messages using AI to extract structured information",
        "required_fields": {
            "message": "User message about food donation (string)"
        },
        "example_request": {
            "message": "I have 20 rotis in Delhi expiring in 4 hours"
        },
        "example_response": {
            "food": "rotis",
            "quantity": "20",
            "expiry": "4 hours",
            "location": "Delhi",
            "status": "success",
            "original_message": "I have 20 rotis in Delhi expiring in 4 hours"
        },
        "ai_model": state.intent.model(),
        "note": "Requires OPENAI_API_KEY environment variable"
    }))
}

/// Extract donation details from a chat message
///
/// POST /chat
///
/// Request body:
/// ```json
/// { "message": "I have 20 rotis in Delhi expiring in 4 hours" }
/// ```
async fn chat(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    let req: ChatRequest = parse_object_body(body.into_inner())?;

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request: {}", errors);
        return Err(ApiError::MissingField("message"));
    }

    let message = req
        .message
        .ok_or(ApiError::MissingField("message"))?;

    let extraction = state.intent.extract(&message).await.map_err(|e| {
        tracing::error!("Chat extraction failed: {}", e);
        ApiError::from(e)
    })?;

    tracing::info!("Chat message processed with status {:?}", extraction.status());

    Ok(HttpResponse::Ok().json(extraction.into_chat_response(message)))
}

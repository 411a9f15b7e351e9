use crate::models::{ChatResponse, ExtractedDonation, ResponseStatus, UNKNOWN_FIELD};
use serde_json::{Map, Value};

/// Note attached to responses whose completion text was not a JSON object
pub const FALLBACK_NOTE: &str = "JSON parsing failed, using fallback";

/// Result of interpreting a completion reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The reply was a JSON object; missing fields are already filled in
    Success(ExtractedDonation),
    /// The reply could not be read as a JSON object
    PartialSuccess { raw: String },
}

impl Extraction {
    pub fn status(&self) -> ResponseStatus {
        match self {
            Extraction::Success(_) => ResponseStatus::Success,
            Extraction::PartialSuccess { .. } => ResponseStatus::PartialSuccess,
        }
    }

    /// Shape the extraction into the chat endpoint's response body
    pub fn into_chat_response(self, original_message: String) -> ChatResponse {
        match self {
            Extraction::Success(donation) => ChatResponse {
                donation,
                status: ResponseStatus::Success,
                original_message,
                ai_response: None,
                note: None,
            },
            Extraction::PartialSuccess { raw } => ChatResponse {
                donation: ExtractedDonation::unknown(),
                status: ResponseStatus::PartialSuccess,
                original_message,
                ai_response: Some(raw),
                note: Some(FALLBACK_NOTE.to_string()),
            },
        }
    }
}

/// Parse the completion text into donation fields.
///
/// Surrounding whitespace is ignored. Anything other than a JSON object
/// yields `PartialSuccess` carrying the trimmed text.
pub fn parse_completion(text: &str) -> Extraction {
    let raw = text.trim();

    match serde_json::from_str::<Map<String, Value>>(raw) {
        Ok(object) => Extraction::Success(ExtractedDonation {
            food: field_text(&object, "food"),
            quantity: field_text(&object, "quantity"),
            expiry: field_text(&object, "expiry"),
            location: field_text(&object, "location"),
        }),
        Err(e) => {
            tracing::debug!("Completion reply is not a JSON object: {}", e);
            Extraction::PartialSuccess { raw: raw.to_string() }
        }
    }
}

/// Absent and null become `unknown`; numbers and other non-string values
/// keep their JSON text.
fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => UNKNOWN_FIELD.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

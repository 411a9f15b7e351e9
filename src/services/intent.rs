use crate::config::OpenAiSettings;
use crate::core::extraction::{parse_completion, Extraction};
use crate::core::prompt::DONATION_SYSTEM_PROMPT;
use crate::services::openai::{CompletionClient, CompletionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("OpenAI API key not configured")]
    NotConfigured,

    #[error("OpenAI API error: {0}")]
    Upstream(#[from] CompletionError),
}

/// Turns a free-text donation message into structured fields using the
/// completion service.
pub struct IntentExtractor {
    model: String,
    client: Option<CompletionClient>,
}

impl IntentExtractor {
    pub fn new(model: String, client: Option<CompletionClient>) -> Self {
        Self { model, client }
    }

    /// Build from settings. A missing or empty API key leaves the extractor
    /// unconfigured rather than failing startup.
    pub fn from_settings(settings: &OpenAiSettings) -> Result<Self, reqwest::Error> {
        let client = match settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(api_key) => Some(CompletionClient::new(settings, api_key.to_string())?),
            None => None,
        };
        Ok(Self::new(settings.model.clone(), client))
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Completion model used for extraction
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Extract donation details from `message`.
    ///
    /// Makes exactly one completion call when configured and none otherwise.
    /// A reply that is not a JSON object is not an error; it comes back as
    /// [`Extraction::PartialSuccess`].
    pub async fn extract(&self, message: &str) -> Result<Extraction, IntentError> {
        let client = self.client.as_ref().ok_or(IntentError::NotConfigured)?;

        let reply = client.complete(DONATION_SYSTEM_PROMPT, message).await?;
        let extraction = parse_completion(&reply);

        if let Extraction::PartialSuccess { raw } = &extraction {
            tracing::warn!("JSON parsing failed for completion reply: {}", raw);
        }

        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseStatus;

    fn settings(base_url: String, api_key: Option<&str>) -> OpenAiSettings {
        OpenAiSettings {
            api_key: api_key.map(str::to_string),
            base_url,
            ..OpenAiSettings::default()
        }
    }

    #[tokio::test]
    async fn test_unconfigured_fails_fast() {
        let extractor = IntentExtractor::from_settings(&settings("http://127.0.0.1:9".into(), None)).unwrap();
        assert!(!extractor.is_configured());

        let err = extractor.extract("20 rotis").await.unwrap_err();
        assert!(matches!(err, IntentError::NotConfigured));
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[tokio::test]
    async fn test_system_prompt_and_message_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 150,
                "messages": [
                    {"role": "system", "content": DONATION_SYSTEM_PROMPT},
                    {"role": "user", "content": "I have 20 rotis in Delhi expiring in 4 hours"}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"content": "{\"food\": \"rotis\", \"quantity\": \"20\", \"expiry\": \"4 hours\", \"location\": \"Delhi\"}"}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let extractor = IntentExtractor::from_settings(&settings(server.url(), Some("sk-test"))).unwrap();
        let extraction = extractor
            .extract("I have 20 rotis in Delhi expiring in 4 hours")
            .await
            .unwrap();

        assert_eq!(extraction.status(), ResponseStatus::Success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_error_wrapped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "You exceeded your current quota"}}"#)
            .create_async()
            .await;

        let extractor = IntentExtractor::from_settings(&settings(server.url(), Some("sk-test"))).unwrap();
        let err = extractor.extract("rice").await.unwrap_err();

        assert!(matches!(err, IntentError::Upstream(_)));
        assert!(err.to_string().starts_with("OpenAI API error: You exceeded your current quota"));
    }
}

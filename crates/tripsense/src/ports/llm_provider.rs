//! LLM Provider Port
//!
//! Abstract interface for the single outbound call to a hosted generative
//! model. Implementations live in the server crate (Gemini, OpenAI) and can
//! be swapped via environment configuration.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::errors::DomainError;

/// Sampling options for a completion
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 8000,
        }
    }
}

impl GenerationOptions {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            ..Default::default()
        }
    }
}

/// LLM Provider interface
///
/// Exactly one network round trip per call: no retries, no caching, no
/// rate limiting. A provider failure surfaces directly as
/// [`DomainError::Provider`].
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate raw text for a prompt
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, DomainError>;

    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

/// Instruction appended to every JSON-producing prompt.
const JSON_ONLY_SUFFIX: &str =
    "IMPORTANT: Respond with ONLY valid JSON, no additional text or markdown. \
     Do not wrap in code blocks.";

/// Ask the provider for a JSON value of shape `T`.
///
/// Best-effort strips Markdown code fences from the raw completion before
/// parsing. There is no schema validation beyond "valid JSON parses" -
/// `T` is expected to tolerate missing fields via serde defaults.
pub async fn generate_json<T: DeserializeOwned>(
    provider: &dyn LlmProvider,
    prompt: &str,
    options: &GenerationOptions,
) -> Result<T, DomainError> {
    let full_prompt = format!("{}\n\n{}", prompt, JSON_ONLY_SUFFIX);
    let raw = provider.generate(&full_prompt, options).await?;
    let cleaned = strip_code_fences(&raw);
    serde_json::from_str(cleaned).map_err(|e| DomainError::Parse(e.to_string()))
}

/// Remove leading ```` ```json ```` / ```` ``` ```` and trailing
/// ```` ``` ```` fence markers, if present.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn unfenced_text_is_unchanged() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn stray_leading_fence_only() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    struct CannedProvider(String);

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn generate(
            &self,
            _prompt: &str,
            _options: &GenerationOptions,
        ) -> Result<String, DomainError> {
            Ok(self.0.clone())
        }

        fn provider_name(&self) -> &str {
            "canned"
        }

        fn model_id(&self) -> &str {
            "canned-1"
        }
    }

    #[tokio::test]
    async fn generate_json_parses_fenced_payload() {
        let provider = CannedProvider("```json\n{\"a\":1}\n```".to_string());
        let value: serde_json::Value =
            generate_json(&provider, "prompt", &GenerationOptions::default())
                .await
                .unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[tokio::test]
    async fn generate_json_propagates_parse_failure() {
        let provider = CannedProvider("Sorry, I can't do that.".to_string());
        let result: Result<serde_json::Value, _> =
            generate_json(&provider, "prompt", &GenerationOptions::default()).await;
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }
}

//! Provider Adapters
//!
//! Reqwest-backed implementations of the [`LlmProvider`] port. Exactly
//! one adapter is constructed per process, chosen by configuration.

pub mod gemini;
pub mod openai;

use std::sync::Arc;

use tripsense::{LlmProvider, Provider};

use crate::config::Config;
use gemini::GeminiClient;
use openai::OpenAiClient;

/// Construct the configured provider client.
pub fn build_provider(config: &Config) -> Arc<dyn LlmProvider> {
    match config.provider {
        Provider::Google => {
            let mut client = GeminiClient::new(&config.api_key);
            if let Some(model) = &config.model {
                client = client.with_model(model);
            }
            Arc::new(client)
        }
        Provider::OpenAI => {
            let mut client = OpenAiClient::new(&config.api_key);
            if let Some(model) = &config.model {
                client = client.with_model(model);
            }
            Arc::new(client)
        }
    }
}

//! Server Configuration
//!
//! Environment-derived settings. The active provider's API key is a
//! startup requirement: a missing credential fails fast here instead of
//! failing on the first request.

use anyhow::{bail, Context, Result};
use std::env;

use tripsense::Provider;

const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct Config {
    /// Which hosted model backs the gateway
    pub provider: Provider,
    /// Credential for that provider
    pub api_key: String,
    /// Optional model-id override
    pub model: Option<String>,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let provider = match env::var("TRIPSENSE_PROVIDER") {
            Ok(raw) => raw
                .parse::<Provider>()
                .map_err(|e| anyhow::anyhow!(e))
                .context("TRIPSENSE_PROVIDER must be 'google' or 'openai'")?,
            Err(_) => Provider::Google,
        };

        let key_var = match provider {
            Provider::Google => "GEMINI_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        };
        let api_key = env::var(key_var)
            .with_context(|| format!("{} environment variable is required", key_var))?;
        if api_key.trim().is_empty() {
            bail!("{} is set but empty", key_var);
        }

        let model = env::var("TRIPSENSE_MODEL").ok().filter(|m| !m.is_empty());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            provider,
            api_key,
            model,
            port,
        })
    }
}

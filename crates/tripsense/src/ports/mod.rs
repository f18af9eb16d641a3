//! Ports
//!
//! Abstract interfaces implemented by infrastructure adapters.

pub mod llm_provider;

pub use llm_provider::{generate_json, strip_code_fences, GenerationOptions, LlmProvider};

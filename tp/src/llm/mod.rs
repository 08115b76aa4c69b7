//! LLM client module for the travel planner
//!
//! Provides the provider-agnostic client trait and the Gemini
//! implementation used in production.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod gemini;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use types::{ChatRequest, ChatResponse, Message, Role};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// Currently only the "gemini" provider exists; the factory keeps the
/// seam open for others.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown LLM provider: '{}'. Supported: gemini",
            other
        ))),
    }
}

//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// Every variant is terminal for the current turn: the planner makes
/// exactly one attempt per call and degrades to a canned apology.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

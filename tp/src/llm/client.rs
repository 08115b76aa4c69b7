//! LlmClient trait definition

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction for interacting with language models.
/// Conversation state lives in the caller's [`crate::session::ChatSession`];
/// the client just turns one request (system prompt + history) into one
/// raw text response.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (one attempt, no retry)
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;
}

//! LLM request/response types for the travel planner
//!
//! These types model the Gemini generateContent API but are provider-agnostic
//! enough to support other chat-completion providers.

use serde::{Deserialize, Serialize};

/// A chat request - everything needed for one model call
///
/// The message list is the full running conversation, ending with the
/// latest user turn.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Fixed system instruction for the travel planner persona
    pub system_prompt: String,

    /// Conversation history, oldest first
    pub messages: Vec<Message>,
}

/// A chat response - the model's raw text for one turn
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Raw response text; may embed a `json` structured payload
    pub text: String,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }

    /// Whitespace-delimited word count of the message text
    pub fn word_count(&self) -> u64 {
        self.text.split_whitespace().count() as u64
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hello there");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "hello there");

        let msg = Message::assistant("hi");
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(Message::user("one two  three").word_count(), 3);
        assert_eq!(Message::user("").word_count(), 0);
        assert_eq!(Message::user("  padded  ").word_count(), 1);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}

//! Conversation session state
//!
//! An explicit session object owned by the caller and passed into the
//! planner each turn. Nothing here is global or persisted; dropping the
//! session ends the conversation.

use crate::llm::{Message, Role};

/// One conversation's state: turns, last destination, destinations seen
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    last_destination: Option<String>,
    destinations: Vec<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    /// Append an assistant turn
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Full conversation history, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Destination resolved on the most recent destination-bearing turn
    pub fn last_destination(&self) -> Option<&str> {
        self.last_destination.as_deref()
    }

    /// Record a resolved destination
    ///
    /// Updates the fallback destination and appends to the seen list in
    /// order of first appearance, suppressing duplicates.
    pub fn note_destination(&mut self, destination: &str) {
        self.last_destination = Some(destination.to_string());
        if !self.destinations.iter().any(|d| d == destination) {
            self.destinations.push(destination.to_string());
        }
    }

    /// Destinations seen this session, in order of first appearance
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Cumulative whitespace word count across all user turns
    ///
    /// This is the "prompt tokens" figure for usage accounting: user turns
    /// only, system instruction and assistant turns excluded.
    pub fn prompt_word_count(&self) -> u64 {
        self.messages
            .iter()
            .filter(|msg| msg.role == Role::User)
            .map(Message::word_count)
            .sum()
    }

    /// Forget everything: turns, fallback destination, seen list
    pub fn clear(&mut self) {
        self.messages.clear();
        self.last_destination = None;
        self.destinations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_accumulate_in_order() {
        let mut session = ChatSession::new();
        session.push_user("trip to Paris");
        session.push_assistant("Here is a plan");
        session.push_user("what about hotels?");

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[2].text, "what about hotels?");
    }

    #[test]
    fn test_destinations_dedup_preserves_first_appearance_order() {
        let mut session = ChatSession::new();
        session.note_destination("Paris");
        session.note_destination("Rome");
        session.note_destination("Paris");

        assert_eq!(session.destinations(), &["Paris".to_string(), "Rome".to_string()]);
        assert_eq!(session.last_destination(), Some("Paris"));
    }

    #[test]
    fn test_prompt_word_count_is_cumulative_user_only() {
        let mut session = ChatSession::new();
        session.push_user("one two three");
        session.push_assistant("this reply does not count at all");
        session.push_user("four five");

        assert_eq!(session.prompt_word_count(), 5);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = ChatSession::new();
        session.push_user("trip to Paris");
        session.note_destination("Paris");

        session.clear();

        assert!(session.messages().is_empty());
        assert!(session.last_destination().is_none());
        assert!(session.destinations().is_empty());
    }
}

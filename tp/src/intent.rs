//! Keyword-based intent classification
//!
//! Best-effort heuristic, not a parser: a case-insensitive substring hit
//! against three fixed keyword sets decides the intent. Checked in fixed
//! priority order: greeting, then thanks, then off-topic.

const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "good morning", "good evening", "how are you"];

const THANK_KEYWORDS: &[&str] = &["thank you", "thanks", "thankyou", "thx", "appreciate", "grateful"];

const OFF_TOPIC_KEYWORDS: &[&str] = &["weather", "news", "joke", "movie", "recipe", "code", "sports"];

/// What a destination-free message is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Thanks,
    OffTopic,
    Unclassified,
}

/// Classify free text against the fixed keyword sets
///
/// Deterministic: the same input always maps to the same intent. Text
/// matching multiple sets resolves to the first set checked.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    if GREETING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Greeting
    } else if THANK_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Thanks
    } else if OFF_TOPIC_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::OffTopic
    } else {
        Intent::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(classify("Hello!"), Intent::Greeting);
        assert_eq!(classify("good morning"), Intent::Greeting);
        assert_eq!(classify("HEY there"), Intent::Greeting);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(classify("thanks!"), Intent::Thanks);
        assert_eq!(classify("Thank you so much"), Intent::Thanks);
        assert_eq!(classify("much appreciated"), Intent::Thanks);
    }

    #[test]
    fn test_off_topic() {
        assert_eq!(classify("tell me a joke"), Intent::OffTopic);
        assert_eq!(classify("any sports results?"), Intent::OffTopic);
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("somewhere warm please"), Intent::Unclassified);
        assert_eq!(classify(""), Intent::Unclassified);
    }

    #[test]
    fn test_priority_greeting_before_thanks() {
        // Matches both sets; greeting is checked first
        assert_eq!(classify("hello and thanks"), Intent::Greeting);
    }

    #[test]
    fn test_priority_thanks_before_off_topic() {
        assert_eq!(classify("thanks for the movie tip"), Intent::Thanks);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "hi" inside "this" counts as a greeting hit - known heuristic quirk
        assert_eq!(classify("this"), Intent::Greeting);
    }
}

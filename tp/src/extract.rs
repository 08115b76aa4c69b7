//! Pattern-based destination extraction
//!
//! Best-effort heuristic: four patterns tried in priority order, first
//! capture that survives cleanup and the three-word limit wins. This can
//! and does mis-extract ("go to sleep" resolves to "Sleep"); that behavior
//! is deliberate and covered by tests, not a bug to fix.

use std::sync::LazyLock;

use regex::Regex;

/// Patterns in priority order; digits or punctuation end a capture
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)trip to ([a-zA-Z\s]+)",
        r"(?i)visit ([a-zA-Z\s]+)",
        r"(?i)go to ([a-zA-Z\s]+)",
        r"(?i)([a-zA-Z\s]+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("destination pattern must compile"))
    .collect()
});

/// Connectives that end a place phrase ("trip to Paris for 2 people")
const PHRASE_STOPS: &[&str] = &["for", "with"];

/// Maximum words in an accepted place name
const MAX_PLACE_WORDS: usize = 3;

/// Pull a place name out of free text, if any pattern matches
///
/// The captured phrase is trimmed, cut at the first trip-detail connective,
/// and title-cased; captures longer than three words are rejected and the
/// next pattern is tried.
pub fn extract_destination(text: &str) -> Option<String> {
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let raw = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");

            let words: Vec<&str> = raw
                .split_whitespace()
                .take_while(|w| !PHRASE_STOPS.contains(&w.to_lowercase().as_str()))
                .collect();

            if words.is_empty() || words.len() > MAX_PLACE_WORDS {
                continue;
            }

            return Some(title_case(&words.join(" ")));
        }
    }
    None
}

/// Capitalize the first letter of each whitespace-separated word
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

//! Model response splitting
//!
//! The model is instructed to return a markdown guide followed by a JSON
//! object. The two are separated by the first literal "json" token -
//! typically the tag of a ```json fence. This is a compatibility shim
//! around free-text output and deliberately does nothing clever.

/// Split a raw model response into (markdown guide, candidate JSON payload)
///
/// Everything before the first "json" is the guide; everything after is
/// trimmed and cut at the first ``` fence. When the token is absent the
/// payload defaults to an empty object and the whole response is markdown.
pub fn split_response(raw: &str) -> (String, String) {
    match raw.split_once("json") {
        Some((markdown, rest)) => {
            let payload = rest.split("```").next().unwrap_or_default().trim().to_string();
            (markdown.to_string(), payload)
        }
        None => (raw.to_string(), "{}".to_string()),
    }
}

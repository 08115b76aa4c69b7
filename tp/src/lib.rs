//! Travel planner - conversational trip planning over an LLM
//!
//! Turns free-text chat messages into travel itineraries by delegating to
//! an external LLM and a weather API, and appends the results to a local
//! SQLite store.
//!
//! # Core Flow
//!
//! One turn = one sequential call chain: resolve a destination from the
//! message (regex heuristics with a session fallback), call the model with
//! the running history, split its reply into a markdown guide and a JSON
//! payload, merge in a 5-day forecast, persist, reply. Destination-free
//! turns short-circuit to canned replies without touching the model.
//!
//! # Modules
//!
//! - [`planner`] - per-turn orchestration state machine
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`weather`] - forecast provider trait and OpenWeather implementation
//! - [`intent`] / [`extract`] - keyword and regex heuristics
//! - [`session`] - explicit per-conversation state
//! - [`repl`] - interactive chat UI adapter
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod extract;
pub mod intent;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod repl;
pub mod session;
pub mod weather;

// Re-export commonly used types
pub use config::{Config, LlmConfig, StorageConfig, WeatherConfig};
pub use extract::extract_destination;
pub use intent::{Intent, classify};
pub use llm::{ChatRequest, ChatResponse, GeminiClient, LlmClient, LlmError, Message, Role, create_client};
pub use planner::{TripPlanner, split_response};
pub use repl::ReplSession;
pub use session::ChatSession;
pub use weather::{ForecastProvider, OpenWeatherClient, PROVIDER_FAILURE, TRANSPORT_FAILURE};

//! Trip planner orchestrator
//!
//! One call to [`TripPlanner::handle_turn`] processes one conversational
//! turn: resolve a destination (or fall back to a canned reply), call the
//! model, split and validate its structured payload, merge weather, and
//! append to the trip/usage log. All failures terminate the turn with a
//! fixed reply string; nothing propagates to the caller.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use tripstore::{TripRecord, TripStore, UsageRecord};

mod parse;

pub use parse::split_response;

use crate::config::Config;
use crate::extract::extract_destination;
use crate::intent::{Intent, classify};
use crate::llm::{ChatRequest, LlmClient, create_client};
use crate::prompts::{
    APOLOGY_REPLY, ASK_DESTINATION_REPLY, GREETING_REPLY, OFF_TOPIC_REPLY, SYSTEM_PROMPT, THANKS_REPLY,
};
use crate::session::ChatSession;
use crate::weather::{ForecastProvider, OpenWeatherClient};

/// Per-turn orchestrator binding model, weather and storage together
pub struct TripPlanner {
    llm: Arc<dyn LlmClient>,
    weather: Arc<dyn ForecastProvider>,
    store: TripStore,
    model: String,
}

impl TripPlanner {
    pub fn new(llm: Arc<dyn LlmClient>, weather: Arc<dyn ForecastProvider>, store: TripStore, model: String) -> Self {
        Self {
            llm,
            weather,
            store,
            model,
        }
    }

    /// Build a planner with the production providers from configuration
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let llm = create_client(&config.llm).map_err(|e| eyre::eyre!("Failed to create LLM client: {}", e))?;
        let weather = Arc::new(OpenWeatherClient::from_config(&config.weather)?);
        let store = TripStore::open(&config.storage.db_path)?;

        Ok(Self::new(llm, weather, store, config.llm.model.clone()))
    }

    /// Process one user turn and produce the reply text
    ///
    /// Never fails: model and parse errors collapse to a fixed apology,
    /// store errors are logged and swallowed.
    pub async fn handle_turn(&self, session: &mut ChatSession, input: &str) -> String {
        debug!(input_len = input.len(), "handle_turn: called");
        session.push_user(input);

        // Resolve a destination from this turn, or fall back to the last one
        let destination = match extract_destination(input) {
            Some(d) => {
                debug!(destination = %d, "handle_turn: extracted destination");
                Some(d)
            }
            None => session.last_destination().map(str::to_string),
        };

        let Some(destination) = destination else {
            // No model call, no persistence, no assistant turn
            return canned_reply(input).to_string();
        };

        session.note_destination(&destination);

        let request = ChatRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            messages: session.messages().to_vec(),
        };

        let response = match self.llm.complete(request).await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "handle_turn: model call failed");
                return APOLOGY_REPLY.to_string();
            }
        };

        // Usage accounting happens before payload validation: a parse
        // failure still leaves a usage row behind.
        let usage = UsageRecord::new(
            &self.model,
            session.prompt_word_count(),
            response.text.split_whitespace().count() as u64,
        );
        if let Err(e) = self.store.record_usage(&usage) {
            warn!(error = %e, "handle_turn: failed to store usage record");
        }

        let (mut markdown, payload) = split_response(&response.text);

        let mut structured: serde_json::Value = match serde_json::from_str(&payload) {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, "handle_turn: structured payload did not parse");
                return APOLOGY_REPLY.to_string();
            }
        };

        if structured.get("itinerary").is_some() {
            let forecast = self.weather.forecast(&destination).await;
            markdown.push_str(&format!(
                "\n\n🌦 Weather Forecast for {} (Next 5 days):\n{}",
                destination, forecast
            ));
            structured["weather"] = serde_json::Value::String(forecast);
            structured["destination"] = serde_json::Value::String(destination.clone());

            let trip = TripRecord::new(input, &destination, structured);
            match self.store.record_trip(&trip) {
                Ok(id) => info!(%destination, trip_id = id, "handle_turn: trip stored"),
                Err(e) => warn!(error = %e, "handle_turn: failed to store trip"),
            }
        }

        session.push_assistant(&markdown);
        markdown
    }
}

/// Pick the canned reply for a turn with no resolvable destination
fn canned_reply(input: &str) -> &'static str {
    match classify(input) {
        Intent::Greeting => GREETING_REPLY,
        Intent::Thanks => THANKS_REPLY,
        Intent::OffTopic => OFF_TOPIC_REPLY,
        Intent::Unclassified => ASK_DESTINATION_REPLY,
    }
}

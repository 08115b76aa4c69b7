//! Integration tests for the travel planner
//!
//! These tests drive the full turn pipeline through the public API with
//! mock providers and a temp-file store: destination resolution, model
//! call, payload split, weather merge, persistence and reply text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;

use tripplanner::llm::{ChatRequest, ChatResponse, LlmClient, LlmError};
use tripplanner::planner::TripPlanner;
use tripplanner::session::ChatSession;
use tripplanner::weather::ForecastProvider;
use tripstore::TripStore;

// =============================================================================
// Mock providers
// =============================================================================

/// LLM that replays scripted responses and counts calls
struct ScriptedLlm {
    responses: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: responses.into_iter().map(String::from).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(idx)
            .cloned()
            .map(|text| ChatResponse { text })
            .ok_or_else(|| LlmError::InvalidResponse("script exhausted".to_string()))
    }
}

/// Forecast provider that always answers with the same summary
struct FixedForecast;

#[async_trait]
impl ForecastProvider for FixedForecast {
    async fn forecast(&self, _place: &str) -> String {
        "\n 2026-08-30: Scattered Clouds, 24.1°C, 55%, 3.6 km/h".to_string()
    }
}

const GUIDE_RESPONSE: &str = "# Travel Guide\nPack light.\n```json\n{\"itinerary\": \"Day 1: Old town\", \"overview\": \"Compact city\", \"budget\": \"mid\"}\n```";

fn setup(responses: Vec<&str>) -> (TempDir, Arc<ScriptedLlm>, TripPlanner) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TripStore::open(dir.path().join("trip_plans.db")).expect("Failed to open store");
    let llm = Arc::new(ScriptedLlm::new(responses));
    let planner = TripPlanner::new(llm.clone(), Arc::new(FixedForecast), store, "gemini-2.0-flash".to_string());
    (dir, llm, planner)
}

fn reopen(dir: &TempDir) -> TripStore {
    TripStore::open(dir.path().join("trip_plans.db")).expect("Failed to reopen store")
}

// =============================================================================
// End-to-end turns
// =============================================================================

#[tokio::test]
async fn test_trip_request_end_to_end() {
    let (dir, llm, planner) = setup(vec![GUIDE_RESPONSE]);
    let mut session = ChatSession::new();

    let reply = planner
        .handle_turn(&mut session, "I want a trip to Paris for 2 people, 3 days")
        .await;

    // Reply is the guide plus a weather section
    assert!(reply.contains("Pack light."));
    assert!(reply.contains("Weather Forecast for Paris (Next 5 days):"));
    assert!(reply.contains("Scattered Clouds"));
    assert_eq!(llm.call_count(), 1);

    // One TripRecord with destination and weather merged into the plan
    let store = reopen(&dir);
    let trips = store.recent_trips(10).unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].destination, "Paris");
    assert_eq!(trips[0].user_input, "I want a trip to Paris for 2 people, 3 days");
    let plan: serde_json::Value = serde_json::from_str(&trips[0].json_data).unwrap();
    assert_eq!(plan["destination"], "Paris");
    assert_eq!(plan["itinerary"], "Day 1: Old town");
    assert!(plan["weather"].as_str().unwrap().contains("Scattered Clouds"));

    // One UsageRecord
    let costs = store.recent_costs(10).unwrap();
    assert_eq!(costs.len(), 1);
    assert_eq!(costs[0].model, "gemini-2.0-flash");
    assert_eq!(costs[0].total_tokens, costs[0].prompt_tokens + costs[0].completion_tokens);
}

#[tokio::test]
async fn test_thanks_without_destination_is_canned_and_free() {
    let (dir, llm, planner) = setup(vec![]);
    let mut session = ChatSession::new();

    let reply = planner.handle_turn(&mut session, "thanks!").await;

    assert_eq!(
        reply,
        "You're very welcome! 😊 I'm always here to help with your travel plans!"
    );
    assert_eq!(llm.call_count(), 0);

    let stats = reopen(&dir).stats().unwrap();
    assert_eq!(stats.trip_count, 0);
    assert_eq!(stats.usage_count, 0);
}

#[tokio::test]
async fn test_followup_turn_reuses_last_destination() {
    let (dir, llm, planner) = setup(vec![GUIDE_RESPONSE, GUIDE_RESPONSE]);
    let mut session = ChatSession::new();

    planner.handle_turn(&mut session, "I want a trip to Lisbon").await;
    let reply = planner.handle_turn(&mut session, "how many days would you suggest?").await;

    assert!(reply.contains("Weather Forecast for Lisbon"));
    assert_eq!(llm.call_count(), 2);
    assert_eq!(session.destinations(), &["Lisbon".to_string()]);

    let trips = reopen(&dir).recent_trips(10).unwrap();
    assert_eq!(trips.len(), 2);
    assert!(trips.iter().all(|t| t.destination == "Lisbon"));
}

#[tokio::test]
async fn test_identical_turns_append_independent_records() {
    let (dir, _llm, planner) = setup(vec![GUIDE_RESPONSE, GUIDE_RESPONSE]);

    // Two fresh sessions, same input: append-only, no dedup
    let mut first = ChatSession::new();
    planner.handle_turn(&mut first, "trip to Rome").await;
    let mut second = ChatSession::new();
    planner.handle_turn(&mut second, "trip to Rome").await;

    let store = reopen(&dir);
    assert_eq!(store.recent_trips(10).unwrap().len(), 2);
    assert_eq!(store.recent_costs(10).unwrap().len(), 2);
}

#[tokio::test]
async fn test_unparseable_payload_keeps_usage_drops_trip() {
    let broken = "# Guide json { this is not json ```";
    let (dir, _llm, planner) = setup(vec![broken]);
    let mut session = ChatSession::new();

    let reply = planner.handle_turn(&mut session, "trip to Berlin").await;

    assert_eq!(reply, "Sorry, something went wrong while planning your trip.");
    let stats = reopen(&dir).stats().unwrap();
    assert_eq!(stats.usage_count, 1);
    assert_eq!(stats.trip_count, 0);
}

#[tokio::test]
async fn test_session_histories_stay_independent() {
    let (_dir, _llm, planner) = setup(vec![GUIDE_RESPONSE, GUIDE_RESPONSE]);

    let mut paris = ChatSession::new();
    planner.handle_turn(&mut paris, "trip to Paris").await;

    let mut rome = ChatSession::new();
    planner.handle_turn(&mut rome, "trip to Rome").await;

    assert_eq!(paris.last_destination(), Some("Paris"));
    assert_eq!(rome.last_destination(), Some("Rome"));
    assert_eq!(paris.messages().len(), 2);
    assert_eq!(rome.messages().len(), 2);
}

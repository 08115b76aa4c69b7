//! TripStore - append-only persistence for the travel planner
//!
//! Two SQLite tables, both write-only from the chat pipeline's point of
//! view:
//!
//! ```text
//! trips(id, timestamp, user_input, destination, json_data)
//! trip_costs(id, timestamp, model, prompt_tokens, completion_tokens, total_tokens, cost_usd)
//! ```
//!
//! Every write is one record, one commit. There is no dedup - replaying the
//! same turn appends a fresh row. Cost math (tiered per-million-token rates,
//! rounded to six decimals) lives next to [`UsageRecord`] so the planner
//! never computes prices itself.
//!
//! # Example
//!
//! ```ignore
//! use tripstore::{TripStore, UsageRecord};
//!
//! let store = TripStore::open("trip_plans.db")?;
//! store.record_usage(&UsageRecord::new("gemini-2.0-flash", 100, 50))?;
//! ```

pub mod cli;
pub mod config;
mod store;

pub use store::{StoreStats, StoredCost, StoredTrip, TripRecord, TripStore, UsageRecord};

//! Core TripStore implementation
//!
//! Append-only writes over SQLite. Each record is one insert in its own
//! implicit transaction; nothing here updates or deletes. The chat pipeline
//! only ever writes - the read helpers exist for the inspection CLI and
//! for tests.

use std::fs;
use std::path::Path;

use chrono::Local;
use eyre::{Context, Result};
use log::debug;
use rusqlite::{Connection, params};

/// Per-million-token input rate below the tier threshold (USD)
const INPUT_RATE_LOW: f64 = 0.075;
/// Per-million-token input rate above the tier threshold (USD)
const INPUT_RATE_HIGH: f64 = 0.15;
/// Per-million-token output rate below the tier threshold (USD)
const OUTPUT_RATE_LOW: f64 = 0.30;
/// Per-million-token output rate above the tier threshold (USD)
const OUTPUT_RATE_HIGH: f64 = 0.60;

/// Token count at which the higher rate applies to the whole count.
///
/// This is a flat rate switch, not marginal pricing: 128_001 prompt tokens
/// are all billed at the high rate.
const TIER_THRESHOLD: u64 = 128_000;

/// A planned trip ready to be appended to the store
#[derive(Debug, Clone)]
pub struct TripRecord {
    /// Local timestamp, `%Y-%m-%d %H:%M:%S`
    pub timestamp: String,
    /// Raw user message that produced the plan
    pub user_input: String,
    /// Resolved destination name
    pub destination: String,
    /// Structured plan as returned by the model, with weather merged in
    pub plan: serde_json::Value,
}

impl TripRecord {
    /// Create a record stamped with the current local time
    pub fn new(user_input: impl Into<String>, destination: impl Into<String>, plan: serde_json::Value) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            user_input: user_input.into(),
            destination: destination.into(),
            plan,
        }
    }
}

/// Token accounting for one model call
#[derive(Debug, Clone)]
pub struct UsageRecord {
    /// Local timestamp, `%Y-%m-%dT%H:%M:%S%.3f`
    pub timestamp: String,
    /// Model identifier the call was billed against
    pub model: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl UsageRecord {
    /// Create a record stamped with the current local time
    pub fn new(model: impl Into<String>, prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            model: model.into(),
            prompt_tokens,
            completion_tokens,
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }

    /// Tiered cost in USD, rounded to six decimal places
    pub fn cost_usd(&self) -> f64 {
        let input_rate = if self.prompt_tokens <= TIER_THRESHOLD {
            INPUT_RATE_LOW
        } else {
            INPUT_RATE_HIGH
        };
        let output_rate = if self.completion_tokens <= TIER_THRESHOLD {
            OUTPUT_RATE_LOW
        } else {
            OUTPUT_RATE_HIGH
        };

        let input_cost = self.prompt_tokens as f64 * input_rate / 1_000_000.0;
        let output_cost = self.completion_tokens as f64 * output_rate / 1_000_000.0;

        round6(input_cost + output_cost)
    }
}

/// Round to six decimal places, half away from zero
fn round6(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

/// A trip row as stored, including its assigned id
#[derive(Debug, Clone)]
pub struct StoredTrip {
    pub id: i64,
    pub timestamp: String,
    pub user_input: String,
    pub destination: String,
    pub json_data: String,
}

/// A usage row as stored, including its assigned id
#[derive(Debug, Clone)]
pub struct StoredCost {
    pub id: i64,
    pub timestamp: String,
    pub model: String,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub cost_usd: f64,
}

/// Aggregate counts for the inspection CLI
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub trip_count: u64,
    pub usage_count: u64,
    pub total_cost_usd: f64,
}

/// The append-only trip/usage store
pub struct TripStore {
    conn: Connection,
}

impl TripStore {
    /// Open or create the store at the given path
    ///
    /// Creates the parent directory and both tables if they do not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let conn = Connection::open(path).context("Failed to open trip database")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS trips (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT,
                user_input TEXT,
                destination TEXT,
                json_data TEXT
            )",
            [],
        )
        .context("Failed to create trips table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS trip_costs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT,
                model TEXT,
                prompt_tokens INTEGER,
                completion_tokens INTEGER,
                total_tokens INTEGER,
                cost_usd REAL
            )",
            [],
        )
        .context("Failed to create trip_costs table")?;

        debug!("TripStore opened at {}", path.display());
        Ok(Self { conn })
    }

    /// Append one trip row; returns the assigned id
    ///
    /// No dedup: identical trips produce independent rows.
    pub fn record_trip(&self, trip: &TripRecord) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO trips (timestamp, user_input, destination, json_data) VALUES (?1, ?2, ?3, ?4)",
                params![
                    trip.timestamp,
                    trip.user_input,
                    trip.destination,
                    trip.plan.to_string()
                ],
            )
            .context("Failed to insert trip")?;
        let id = self.conn.last_insert_rowid();
        debug!("Trip stored: {} (id {})", trip.destination, id);
        Ok(id)
    }

    /// Append one usage row; returns the assigned id
    pub fn record_usage(&self, usage: &UsageRecord) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO trip_costs (timestamp, model, prompt_tokens, completion_tokens, total_tokens, cost_usd)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    usage.timestamp,
                    usage.model,
                    usage.prompt_tokens as i64,
                    usage.completion_tokens as i64,
                    usage.total_tokens() as i64,
                    usage.cost_usd()
                ],
            )
            .context("Failed to insert usage record")?;
        let id = self.conn.last_insert_rowid();
        debug!(
            "Token cost stored: {}+{} = {} (id {})",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.cost_usd(),
            id
        );
        Ok(id)
    }

    /// Most recent trips, newest first
    pub fn recent_trips(&self, limit: usize) -> Result<Vec<StoredTrip>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, user_input, destination, json_data
             FROM trips ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(StoredTrip {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    user_input: row.get(2)?,
                    destination: row.get(3)?,
                    json_data: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Most recent usage rows, newest first
    pub fn recent_costs(&self, limit: usize) -> Result<Vec<StoredCost>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, timestamp, model, prompt_tokens, completion_tokens, total_tokens, cost_usd
             FROM trip_costs ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(StoredCost {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    model: row.get(2)?,
                    prompt_tokens: row.get::<_, i64>(3)? as u64,
                    completion_tokens: row.get::<_, i64>(4)? as u64,
                    total_tokens: row.get::<_, i64>(5)? as u64,
                    cost_usd: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Aggregate counts across both tables
    pub fn stats(&self) -> Result<StoreStats> {
        let trip_count: i64 = self.conn.query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))?;
        let usage_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM trip_costs", [], |row| row.get(0))?;
        let total_cost_usd: f64 = self
            .conn
            .query_row("SELECT COALESCE(SUM(cost_usd), 0.0) FROM trip_costs", [], |row| {
                row.get(0)
            })?;

        Ok(StoreStats {
            trip_count: trip_count as u64,
            usage_count: usage_count as u64,
            total_cost_usd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, TripStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = TripStore::open(dir.path().join("trip_plans.db")).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("trips.db");
        let store = TripStore::open(&nested);
        assert!(store.is_ok());
        assert!(nested.exists());
    }

    #[test]
    fn test_record_trip_and_read_back() {
        let (_dir, store) = open_temp();

        let trip = TripRecord::new(
            "I want a trip to Paris",
            "Paris",
            serde_json::json!({"itinerary": "Day 1: Louvre", "destination": "Paris"}),
        );
        let id = store.record_trip(&trip).unwrap();
        assert_eq!(id, 1);

        let trips = store.recent_trips(10).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].destination, "Paris");
        assert_eq!(trips[0].user_input, "I want a trip to Paris");

        let parsed: serde_json::Value = serde_json::from_str(&trips[0].json_data).unwrap();
        assert_eq!(parsed["itinerary"], "Day 1: Louvre");
    }

    #[test]
    fn test_duplicate_trips_append_independently() {
        let (_dir, store) = open_temp();

        let trip = TripRecord::new("trip to Rome", "Rome", serde_json::json!({"itinerary": "x"}));
        let first = store.record_trip(&trip).unwrap();
        let second = store.record_trip(&trip).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.recent_trips(10).unwrap().len(), 2);
    }

    #[test]
    fn test_record_usage_and_stats() {
        let (_dir, store) = open_temp();

        let usage = UsageRecord::new("gemini-2.0-flash", 100, 50);
        store.record_usage(&usage).unwrap();
        store.record_usage(&usage).unwrap();

        let costs = store.recent_costs(10).unwrap();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].prompt_tokens, 100);
        assert_eq!(costs[0].completion_tokens, 50);
        assert_eq!(costs[0].total_tokens, 150);
        assert_eq!(costs[0].cost_usd, 0.000023);

        let stats = store.stats().unwrap();
        assert_eq!(stats.trip_count, 0);
        assert_eq!(stats.usage_count, 2);
        assert!((stats.total_cost_usd - 0.000046).abs() < 1e-12);
    }

    #[test]
    fn test_cost_low_tier() {
        // 100 * 0.075/1e6 + 50 * 0.30/1e6 = 0.0000225, rounds to 0.000023
        let usage = UsageRecord::new("gemini-2.0-flash", 100, 50);
        assert_eq!(usage.cost_usd(), 0.000023);
    }

    #[test]
    fn test_cost_tier_switch_is_flat_not_marginal() {
        let at_threshold = UsageRecord::new("m", 128_000, 0);
        assert_eq!(at_threshold.cost_usd(), round6(128_000.0 * 0.075 / 1_000_000.0));

        // One token over the threshold bills the whole count at the high rate
        let over = UsageRecord::new("m", 128_001, 0);
        assert_eq!(over.cost_usd(), round6(128_001.0 * 0.15 / 1_000_000.0));

        let output_over = UsageRecord::new("m", 0, 128_001);
        assert_eq!(output_over.cost_usd(), round6(128_001.0 * 0.60 / 1_000_000.0));
    }

    #[test]
    fn test_cost_zero_tokens() {
        let usage = UsageRecord::new("m", 0, 0);
        assert_eq!(usage.cost_usd(), 0.0);
        assert_eq!(usage.total_tokens(), 0);
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.0000225), 0.000023);
        assert_eq!(round6(0.00001949), 0.000019);
        assert_eq!(round6(1.2345675), 1.234568);
    }
}

//! Weather lookup for resolved destinations
//!
//! A forecast is decoration on the trip plan, never a blocker: the
//! provider trait returns a formatted string on success and one of two
//! fixed placeholder strings on failure. Nothing here raises to the
//! planner.

use async_trait::async_trait;

mod openweather;

pub use openweather::OpenWeatherClient;

/// Placeholder when the provider answered but reported a failure code
pub const PROVIDER_FAILURE: &str = "Could not retrieve weather info.";

/// Placeholder when the request itself failed (network, decode, short payload)
pub const TRANSPORT_FAILURE: &str = "Weather info unavailable.";

/// Multi-day forecast lookup by place name
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Five-day forecast for a place, or a fixed placeholder on failure
    async fn forecast(&self, place: &str) -> String;
}

//! OpenWeather forecast client
//!
//! Calls the 5-day/3-hour forecast endpoint and samples one entry per day
//! (every 8th of the first 40 slots) into a short multi-line summary.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use super::{ForecastProvider, PROVIDER_FAILURE, TRANSPORT_FAILURE};
use crate::config::WeatherConfig;
use crate::extract::title_case;

/// Slots per day in the 3-hour forecast series
const SLOTS_PER_DAY: usize = 8;

/// Days covered by one forecast
const FORECAST_DAYS: usize = 5;

/// OpenWeather API client
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    /// Create a new client from configuration
    pub fn from_config(config: &WeatherConfig) -> eyre::Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| eyre::eyre!("Weather API key not found in environment variable {}", config.api_key_env))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    async fn fetch(&self, place: &str) -> Result<ForecastPayload, reqwest::Error> {
        let url = format!("{}/data/2.5/forecast", self.base_url);
        debug!(%place, "fetch: requesting forecast");

        self.http
            .get(&url)
            .query(&[("q", place), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?
            .json::<ForecastPayload>()
            .await
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherClient {
    async fn forecast(&self, place: &str) -> String {
        match self.fetch(place).await {
            Ok(payload) => summarize(place, &payload),
            Err(e) => {
                error!(%place, error = %e, "forecast: fetch failed");
                TRANSPORT_FAILURE.to_string()
            }
        }
    }
}

/// Turn a fetched payload into the forecast text or a fixed failure string
fn summarize(place: &str, payload: &ForecastPayload) -> String {
    // The provider signals failure in-band: cod is the string "200" on
    // success, anything else (including a numeric code) is a failure.
    if payload.cod.as_str() != Some("200") {
        debug!(%place, cod = %payload.cod, "forecast: provider failure code");
        return PROVIDER_FAILURE.to_string();
    }

    match format_forecast(payload) {
        Some(text) => text,
        None => {
            error!(%place, slots = payload.list.len(), "forecast: series too short");
            TRANSPORT_FAILURE.to_string()
        }
    }
}

/// Format one sample per day across the 5-day window
///
/// Returns None when the series is too short to cover five days.
fn format_forecast(payload: &ForecastPayload) -> Option<String> {
    let mut forecast = String::new();

    for day in 0..FORECAST_DAYS {
        let slot = payload.list.get(day * SLOTS_PER_DAY)?;
        let date = slot.dt_txt.split(' ').next().unwrap_or(&slot.dt_txt);
        let desc = slot
            .weather
            .first()
            .map(|w| title_case(&w.description))
            .unwrap_or_default();

        forecast.push_str(&format!(
            "\n {}: {}, {}°C, {}%, {} km/h",
            date, desc, slot.main.temp, slot.main.humidity, slot.wind.speed
        ));
    }

    Some(forecast)
}

// OpenWeather API response types

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    /// String "200" on success; error payloads may use a number instead
    cod: serde_json::Value,
    #[serde(default)]
    list: Vec<ForecastSlot>,
}

#[derive(Debug, Deserialize)]
struct ForecastSlot {
    dt_txt: String,
    #[serde(default)]
    weather: Vec<SlotWeather>,
    main: SlotMain,
    wind: SlotWind,
}

#[derive(Debug, Deserialize)]
struct SlotWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct SlotMain {
    temp: f64,
    humidity: u64,
}

#[derive(Debug, Deserialize)]
struct SlotWind {
    speed: f64,
}

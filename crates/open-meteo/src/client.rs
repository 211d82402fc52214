//! HTTP client for the Open-Meteo forecast endpoint.
//!
//! One outbound GET per call, no retry, no caching. The upstream status
//! code is not inspected: whatever JSON body comes back is decoded and
//! passed through, matching the proxy's pass-through contract.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::MeteoError;
use crate::types::{Coordinates, ForecastDays, ForecastPayload};

/// Production endpoint for forecast queries.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Fixed parameter set for current-conditions requests.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation,rain,wind_speed_10m,wind_direction_10m,weather_code";

/// Fixed parameter set for daily-forecast requests.
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,\
rain_sum,precipitation_probability_max,wind_speed_10m_max,weather_code";

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct MeteoClientConfig {
    /// Base URL of the forecast endpoint.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for MeteoClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Client for the Open-Meteo forecast API.
pub struct MeteoClient {
    http: Client,
    base_url: String,
}

impl MeteoClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MeteoClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch current conditions for a location.
    pub async fn current(&self, coords: Coordinates) -> Result<ForecastPayload, MeteoError> {
        self.fetch(self.current_url(coords)).await
    }

    /// Fetch a multi-day forecast for a location.
    pub async fn forecast(
        &self,
        coords: Coordinates,
        days: ForecastDays,
    ) -> Result<ForecastPayload, MeteoError> {
        self.fetch(self.forecast_url(coords, days)).await
    }

    fn current_url(&self, coords: Coordinates) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone=auto",
            self.base_url, coords.latitude, coords.longitude, CURRENT_FIELDS
        )
    }

    fn forecast_url(&self, coords: Coordinates, days: ForecastDays) -> String {
        format!(
            "{}?latitude={}&longitude={}&daily={}&timezone=auto&forecast_days={}",
            self.base_url,
            coords.latitude,
            coords.longitude,
            DAILY_FIELDS,
            days.get()
        )
    }

    async fn fetch(&self, url: String) -> Result<ForecastPayload, MeteoError> {
        debug!(url = %url, "Requesting upstream forecast data");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(MeteoError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(MeteoError::Body)?;
        let payload: ForecastPayload = serde_json::from_str(&body)?;

        debug!(status = %status, "Decoded upstream response");
        Ok(payload)
    }
}

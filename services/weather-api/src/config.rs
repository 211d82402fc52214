//! Service configuration loaded from the environment.

use std::time::Duration;

use open_meteo::Coordinates;

/// Fallback location substituted when a request specifies no coordinates
/// (Brisbane).
pub const DEFAULT_LATITUDE: f64 = -27.4705;
pub const DEFAULT_LONGITUDE: f64 = 153.0260;

/// Immutable service configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the upstream forecast endpoint.
    pub upstream_url: String,

    /// Per-request timeout for upstream calls.
    pub upstream_timeout: Duration,

    /// Location used when a request carries no coordinates.
    pub default_coordinates: Coordinates,
}

impl AppConfig {
    /// Resolve configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        let upstream_url = std::env::var("OPEN_METEO_BASE_URL")
            .unwrap_or_else(|_| open_meteo::client::DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            upstream_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            default_coordinates: Coordinates {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
            },
        }
    }
}

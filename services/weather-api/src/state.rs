//! Shared application state.

use anyhow::{Context, Result};

use open_meteo::{MeteoClient, MeteoClientConfig};

use crate::config::AppConfig;

/// Per-process state shared across request handlers.
///
/// Nothing here is mutated after startup; requests only read it.
pub struct AppState {
    /// Upstream forecast client.
    pub client: MeteoClient,

    /// Resolved service configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Build the upstream client from configuration.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = MeteoClient::new(MeteoClientConfig {
            base_url: config.upstream_url.clone(),
            request_timeout: config.upstream_timeout,
            ..MeteoClientConfig::default()
        })
        .context("Failed to create upstream HTTP client")?;

        Ok(Self { client, config })
    }
}

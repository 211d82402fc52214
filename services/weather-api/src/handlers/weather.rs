//! Current-conditions and forecast handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;

use open_meteo::MeteoError;

use crate::response::{ErrorBody, WeatherEnvelope};
use crate::state::AppState;
use crate::validation::{self, ValidationError};

/// Query parameters accepted by both weather endpoints.
///
/// Everything arrives as an optional string so that validation can
/// distinguish absent, empty, and malformed values.
#[derive(Debug, Deserialize)]
pub struct WeatherQueryParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,

    /// Forecast endpoint only; ignored by the current endpoint.
    pub days: Option<String>,
}

/// GET /api/weather/current
pub async fn current_weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<WeatherQueryParams>,
) -> Response {
    let coords = match validation::resolve_coordinates(
        params.latitude.as_deref(),
        params.longitude.as_deref(),
        state.config.default_coordinates,
    ) {
        Ok(coords) => coords,
        Err(e) => return validation_error_response(e),
    };

    match state.client.current(coords).await {
        Ok(payload) => {
            Json(WeatherEnvelope::new(payload.current, payload.current_units)).into_response()
        }
        Err(e) => upstream_error_response(
            e,
            "Failed to fetch weather data",
            "Failed to parse weather data",
        ),
    }
}

/// GET /api/weather/forecast
pub async fn forecast_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<WeatherQueryParams>,
) -> Response {
    let coords = match validation::resolve_coordinates(
        params.latitude.as_deref(),
        params.longitude.as_deref(),
        state.config.default_coordinates,
    ) {
        Ok(coords) => coords,
        Err(e) => return validation_error_response(e),
    };

    let days = match validation::resolve_days(params.days.as_deref()) {
        Ok(days) => days,
        Err(e) => return validation_error_response(e),
    };

    match state.client.forecast(coords, days).await {
        Ok(payload) => {
            Json(WeatherEnvelope::new(payload.daily, payload.daily_units)).into_response()
        }
        Err(e) => upstream_error_response(
            e,
            "Failed to fetch forecast data",
            "Failed to parse forecast data",
        ),
    }
}

fn validation_error_response(err: ValidationError) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::from(err))).into_response()
}

/// Map an upstream failure to a generic 500. The detail is logged here
/// and never reaches the client.
fn upstream_error_response(err: MeteoError, fetch_message: &str, parse_message: &str) -> Response {
    error!(error = %err, "Upstream weather request failed");

    let message = if err.is_fetch_failure() {
        fetch_message
    } else {
        parse_message
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::internal(message)),
    )
        .into_response()
}

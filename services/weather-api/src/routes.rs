//! Router assembly.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::response::ErrorBody;
use crate::state::AppState;

/// Build the service router with all routes and middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/weather/current",
            get(handlers::weather::current_weather_handler),
        )
        .route(
            "/api/weather/forecast",
            get(handlers::weather::forecast_handler),
        )
        .route("/health", get(handlers::health::health_handler))
        .fallback(not_found_handler)
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Fixed 404 body for any unmatched path.
async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found())).into_response()
}

//! End-to-end router tests.
//!
//! The upstream provider is simulated with wiremock; the service router
//! is exercised in-process via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::AppConfig;
use crate::routes::build_router;
use crate::state::AppState;

fn app_for(upstream_url: &str) -> Router {
    let config = AppConfig {
        upstream_url: upstream_url.to_string(),
        ..AppConfig::from_env()
    };
    let state = Arc::new(AppState::new(config).unwrap());
    build_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unmatched_route_returns_fixed_404() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/history").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": "Not Found",
            "message": "The requested resource does not exist"
        })
    );
}

#[tokio::test]
async fn test_current_missing_longitude() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/current?latitude=35.2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": "Missing parameters",
            "message": "Both latitude and longitude must be provided if specifying location"
        })
    );
}

#[tokio::test]
async fn test_current_invalid_latitude() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/current?latitude=91&longitude=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": "Invalid latitude",
            "message": "Latitude must be between -90 and 90"
        })
    );
}

#[tokio::test]
async fn test_current_invalid_longitude() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/current?latitude=0&longitude=181").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid longitude");
    assert_eq!(body["message"], "Longitude must be between -180 and 180");
}

#[tokio::test]
async fn test_current_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "35.2"))
        .and(query_param("longitude", "-97.5"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"temperature_2m": 21.5},
            "current_units": {"temperature_2m": "°C"}
        })))
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, body) = get(app, "/api/weather/current?latitude=35.2&longitude=-97.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {"temperature_2m": 21.5},
            "units": {"temperature_2m": "°C"}
        })
    );
}

#[tokio::test]
async fn test_current_defaults_to_brisbane() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "-27.4705"))
        .and(query_param("longitude", "153.026"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"temperature_2m": 18.0},
            "current_units": {"temperature_2m": "°C"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, body) = get(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn test_current_missing_upstream_keys_degrade_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"latitude": -27.5})))
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, body) = get(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "data": null, "units": null})
    );
}

#[tokio::test]
async fn test_current_upstream_unreachable() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Internal server error",
            "message": "Failed to fetch weather data"
        })
    );
}

#[tokio::test]
async fn test_current_upstream_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, body) = get(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to parse weather data");
}

#[tokio::test]
async fn test_forecast_success_with_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("forecast_days", "5"))
        .and(query_param("latitude", "-27.4705"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily": {"temperature_2m_max": [25.0, 26.0, 24.0, 23.5, 27.1]},
            "daily_units": {"temperature_2m_max": "°C"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, body) = get(app, "/api/weather/forecast?days=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["temperature_2m_max"][4], json!(27.1));
    assert_eq!(body["units"]["temperature_2m_max"], json!("°C"));
}

#[tokio::test]
async fn test_forecast_defaults_to_seven_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("forecast_days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily": {}, "daily_units": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server.uri());
    let (status, _) = get(app, "/api/weather/forecast").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_forecast_invalid_days() {
    let app = app_for("http://127.0.0.1:1");

    for uri in [
        "/api/weather/forecast?days=0",
        "/api/weather/forecast?days=17",
        "/api/weather/forecast?days=soon",
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "Invalid days parameter",
                "message": "Days must be between 1 and 16"
            })
        );
    }
}

#[tokio::test]
async fn test_forecast_coordinate_validation_precedes_days() {
    // A bad location fails before the days parameter is looked at.
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/forecast?latitude=99&longitude=0&days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid latitude");
}

#[tokio::test]
async fn test_forecast_upstream_unreachable() {
    let app = app_for("http://127.0.0.1:1");
    let (status, body) = get(app, "/api/weather/forecast").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Internal server error",
            "message": "Failed to fetch forecast data"
        })
    );
}

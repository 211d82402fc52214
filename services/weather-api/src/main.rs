//! Weather API server.
//!
//! HTTP proxy forwarding coordinates to the Open-Meteo forecast API and
//! reshaping the response into a simplified JSON envelope.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use weather_api::config::AppConfig;
use weather_api::routes;
use weather_api::state::AppState;

/// Weather proxy server
#[derive(Parser, Debug)]
#[command(name = "weather-api")]
#[command(about = "HTTP proxy for the Open-Meteo forecast API")]
struct Args {
    /// Listen port
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "WEATHER_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting weather API server");

    let config = AppConfig::from_env();

    // Initialize application state
    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    let app = routes::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Weather API server is running on port {}", args.port);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}

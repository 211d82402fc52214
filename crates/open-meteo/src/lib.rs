//! Client for the Open-Meteo forecast API.
//!
//! This crate wraps the upstream HTTP endpoint with typed coordinates,
//! a validated forecast-day count, and a tolerant payload decode that
//! only covers the fields the proxy consumes.

pub mod client;
pub mod error;
pub mod types;

pub use client::{MeteoClient, MeteoClientConfig};
pub use error::MeteoError;
pub use types::{
    CoordinateRangeError, Coordinates, ForecastDays, ForecastPayload, InvalidForecastDays,
};

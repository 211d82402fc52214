//! Weather API service library.
//!
//! HTTP proxy over the Open-Meteo forecast endpoint: validates request
//! coordinates, performs the upstream fetch, and reshapes the payload
//! into a uniform success/error envelope.

pub mod config;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;

#[cfg(test)]
mod routes_tests;

//! HTTP request handlers for the weather proxy.

pub mod health;
pub mod weather;

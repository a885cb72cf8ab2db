//! HTTP request handlers.

pub mod admin;
pub mod chirps;
pub mod http;

pub use http::AppState;

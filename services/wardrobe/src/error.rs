//! Custom error types for the wardrobe service

use common::StorageError;
use thiserror::Error;

/// Errors raised by the HTTP request wrapper
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request or response body was not the expected JSON
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while obtaining weather data
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The weather source could not deliver a snapshot
    #[error("Weather provider unavailable: {0}")]
    Unavailable(String),

    /// The fetched snapshot could not be cached
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

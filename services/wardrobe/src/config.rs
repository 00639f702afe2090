//! Application configuration for the wardrobe service

use std::time::Duration;

use anyhow::{Context, Result};
use common::StorageConfig;

use crate::stores::weather::DEFAULT_CITY;

/// Base URL used by the placeholder REST endpoints
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage backend configuration
    pub storage: StorageConfig,
    /// City used before any weather fetch selects another
    pub default_city: String,
    /// Simulated weather round-trip latency
    pub weather_delay: Duration,
    /// Simulated image upload latency
    pub upload_delay: Duration,
    /// Base URL for the API client
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            default_city: DEFAULT_CITY.to_string(),
            weather_delay: Duration::from_millis(500),
            upload_delay: Duration::from_millis(500),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `WARDROBE_STORAGE_DIR`: directory for persisted data (default: in-memory)
    /// - `WARDROBE_DEFAULT_CITY`: initial weather city (default: "北京")
    /// - `WEATHER_DELAY_MS`: simulated weather latency in milliseconds (default: 500)
    /// - `UPLOAD_DELAY_MS`: simulated upload latency in milliseconds (default: 500)
    /// - `API_BASE_URL`: base URL for the API client (default: "https://api.example.com")
    pub fn from_env() -> Result<Self> {
        let default_city =
            std::env::var("WARDROBE_DEFAULT_CITY").unwrap_or_else(|_| DEFAULT_CITY.to_string());

        let weather_delay = duration_from_env("WEATHER_DELAY_MS", 500)?;
        let upload_delay = duration_from_env("UPLOAD_DELAY_MS", 500)?;

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(AppConfig {
            storage: StorageConfig::from_env(),
            default_city,
            weather_delay,
            upload_delay,
            api_base_url,
        })
    }
}

fn duration_from_env(var: &str, default_ms: u64) -> Result<Duration> {
    let millis = match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number of milliseconds, got {:?}", var, value))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(millis))
}

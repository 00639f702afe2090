//! Weather models

use serde::{Deserialize, Serialize};

/// Current weather for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: String,
    /// Current temperature in °C
    pub temp: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub condition: String,
    pub condition_icon: String,
    /// Relative humidity in percent
    pub humidity: u8,
    pub wind_speed: u32,
    pub wind_dir: String,
    /// Air quality index
    pub aqi: u32,
    pub aqi_level: String,
    pub suggestion: String,
    pub dress_suggestion: String,
}

/// Last successful fetch, persisted for recovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedWeather {
    pub weather: WeatherSnapshot,
    pub location: String,
    /// Fetch time in epoch milliseconds
    pub timestamp: i64,
}

/// Temperature bucket an outfit suggestion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Summer,
    Spring,
    Autumn,
    Winter,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Summer => "summer",
            SuggestionKind::Spring => "spring",
            SuggestionKind::Autumn => "autumn",
            SuggestionKind::Winter => "winter",
        }
    }
}

/// Clothing suggestion derived from the current weather
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub items: Vec<String>,
}

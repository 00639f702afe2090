//! Weather store, mocked weather source and outfit suggestions

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{KeyValueStore, KeyValueStoreExt};
use tracing::{error, info, warn};

use crate::error::WeatherError;
use crate::models::{CachedWeather, OutfitSuggestion, SuggestionKind, WeatherSnapshot};

/// Storage key of the last successful fetch
pub const WEATHER_CACHE_KEY: &str = "cachedWeather";

/// City used when nothing else is selected or a lookup misses
pub const DEFAULT_CITY: &str = "北京";

/// Source of weather snapshots
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;
}

/// Static weather table answered after a fixed delay
#[derive(Debug, Clone)]
pub struct MockWeatherProvider {
    delay: Duration,
}

impl MockWeatherProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Snapshot for `city`, falling back to the default city's entry
    pub fn lookup(city: &str) -> WeatherSnapshot {
        match city {
            "上海" => WeatherSnapshot {
                city: "上海".to_string(),
                temp: 25,
                temp_min: 21,
                temp_max: 28,
                condition: "多云".to_string(),
                condition_icon: "cloudy".to_string(),
                humidity: 65,
                wind_speed: 15,
                wind_dir: "东南风".to_string(),
                aqi: 58,
                aqi_level: "良".to_string(),
                suggestion: "天气闷热，注意防暑。".to_string(),
                dress_suggestion: "建议穿轻薄透气的衣物。".to_string(),
            },
            "广州" => WeatherSnapshot {
                city: "广州".to_string(),
                temp: 28,
                temp_min: 24,
                temp_max: 32,
                condition: "雷阵雨".to_string(),
                condition_icon: "thunder".to_string(),
                humidity: 78,
                wind_speed: 8,
                wind_dir: "南风".to_string(),
                aqi: 35,
                aqi_level: "优".to_string(),
                suggestion: "有雷阵雨，外出记得带伞。".to_string(),
                dress_suggestion: "建议穿凉快衣物，建议带雨具。".to_string(),
            },
            _ => WeatherSnapshot {
                city: DEFAULT_CITY.to_string(),
                temp: 22,
                temp_min: 18,
                temp_max: 26,
                condition: "晴".to_string(),
                condition_icon: "sunny".to_string(),
                humidity: 45,
                wind_speed: 12,
                wind_dir: "东北风".to_string(),
                aqi: 42,
                aqi_level: "优".to_string(),
                suggestion: "今日天气晴朗，适合外出。".to_string(),
                dress_suggestion: "建议穿轻便服装，早晚温差较大，可带薄外套。".to_string(),
            },
        }
    }
}

impl Default for MockWeatherProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::lookup(city))
    }
}

/// Clothing suggestion for the given weather
///
/// Temperatures bucket as ≥28 summer, 18..28 spring, 10..18 autumn and
/// below 10 winter. Rain adds an umbrella, snow adds waterproof boots.
pub fn suggest_outfit(weather: &WeatherSnapshot) -> OutfitSuggestion {
    let (kind, items): (SuggestionKind, &[&str]) = match weather.temp {
        t if t >= 28 => (SuggestionKind::Summer, &["轻薄上衣", "短裤/短裙", "凉鞋"]),
        t if t >= 18 => (SuggestionKind::Spring, &["长袖T恤", "牛仔裤/休闲裤", "运动鞋"]),
        t if t >= 10 => (SuggestionKind::Autumn, &["薄外套", "长裤", "平底鞋"]),
        _ => (SuggestionKind::Winter, &["羽绒服", "保暖裤", "靴子"]),
    };

    let mut items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    if weather.condition.contains('雨') {
        items.push("雨伞".to_string());
    }
    if weather.condition.contains('雪') {
        items.push("防水靴".to_string());
    }

    OutfitSuggestion { kind, items }
}

/// Current weather for the selected city, cached in storage
pub struct WeatherStore {
    storage: Arc<dyn KeyValueStore>,
    provider: Arc<dyn WeatherProvider>,
    weather: Option<WeatherSnapshot>,
    location: String,
    last_update: Option<DateTime<Utc>>,
}

impl WeatherStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            storage,
            provider,
            weather: None,
            location: DEFAULT_CITY.to_string(),
            last_update: None,
        }
    }

    /// Start from `city` instead of the default city
    pub fn with_location(mut self, city: impl Into<String>) -> Self {
        self.location = city.into();
        self
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Fetch weather for `city`
    ///
    /// Failures are logged and answered from the cached snapshot when one
    /// exists; callers inspect the returned state to see what is available.
    pub async fn fetch_weather(&mut self, city: &str) -> Option<&WeatherSnapshot> {
        if let Err(e) = self.try_fetch(city).await {
            error!("Failed to fetch weather for {}: {}", city, e);
            self.restore_from_cache();
        }
        self.weather.as_ref()
    }

    /// Fetch weather again for the current location
    pub async fn refresh(&mut self) -> Option<&WeatherSnapshot> {
        let city = self.location.clone();
        self.fetch_weather(&city).await
    }

    async fn try_fetch(&mut self, city: &str) -> Result<(), WeatherError> {
        let data = self.provider.fetch(city).await?;
        let now = Utc::now();

        self.weather = Some(data.clone());
        self.location = city.to_string();
        self.last_update = Some(now);

        let cached = CachedWeather {
            weather: data,
            location: city.to_string(),
            timestamp: now.timestamp_millis(),
        };
        self.storage.set_json(WEATHER_CACHE_KEY, &cached)?;

        info!("Weather updated for {}", city);
        Ok(())
    }

    fn restore_from_cache(&mut self) {
        match self.storage.get_json::<CachedWeather>(WEATHER_CACHE_KEY) {
            Ok(Some(cached)) => {
                info!("Using cached weather for {}", cached.location);
                self.weather = Some(cached.weather);
                self.location = cached.location;
            }
            Ok(None) => warn!("No cached weather available"),
            Err(e) => warn!("Failed to read cached weather: {}", e),
        }
    }

    /// Suggestion for the loaded weather, `None` before any weather is known
    pub fn outfit_suggestion(&self) -> Option<OutfitSuggestion> {
        self.weather.as_ref().map(suggest_outfit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MemoryStore;

    struct FailingProvider;

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch(&self, _city: &str) -> Result<WeatherSnapshot, WeatherError> {
            Err(WeatherError::Unavailable("network down".to_string()))
        }
    }

    fn snapshot(temp: i32, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temp,
            condition: condition.to_string(),
            ..MockWeatherProvider::lookup(DEFAULT_CITY)
        }
    }

    fn mock_store(storage: Arc<MemoryStore>) -> WeatherStore {
        WeatherStore::new(storage, Arc::new(MockWeatherProvider::new(Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_fetch_known_city() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = mock_store(storage.clone());

        let weather = store.fetch_weather("北京").await.cloned().unwrap();
        assert_eq!(weather.city, "北京");
        assert_eq!(weather.temp, 22);
        assert_eq!(store.location(), "北京");
        assert!(store.last_update().is_some());

        let cached: CachedWeather = storage.get_json(WEATHER_CACHE_KEY).unwrap().unwrap();
        assert_eq!(cached.weather, weather);
        assert_eq!(cached.location, "北京");
    }

    #[tokio::test]
    async fn test_unknown_city_falls_back_to_default() {
        let mut store = mock_store(Arc::new(MemoryStore::new()));

        let weather = store.fetch_weather("火星").await.cloned().unwrap();
        assert_eq!(weather, MockWeatherProvider::lookup("北京"));
        assert_eq!(store.location(), "火星");
    }

    #[tokio::test]
    async fn test_refresh_uses_current_location() {
        let mut store =
            mock_store(Arc::new(MemoryStore::new())).with_location("上海");

        let weather = store.refresh().await.cloned().unwrap();
        assert_eq!(weather.city, "上海");
    }

    #[tokio::test]
    async fn test_failed_fetch_restores_cache() {
        let storage = Arc::new(MemoryStore::new());
        let mut good = mock_store(storage.clone());
        good.fetch_weather("广州").await;

        let mut store = WeatherStore::new(storage, Arc::new(FailingProvider));
        let weather = store.fetch_weather("上海").await.cloned().unwrap();

        assert_eq!(weather.city, "广州");
        assert_eq!(store.location(), "广州");
        assert!(store.last_update().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_without_cache_leaves_weather_unset() {
        let mut store = WeatherStore::new(Arc::new(MemoryStore::new()), Arc::new(FailingProvider));

        assert!(store.fetch_weather("北京").await.is_none());
        assert!(store.outfit_suggestion().is_none());
    }

    #[test]
    fn test_suggestion_buckets() {
        let hot = suggest_outfit(&snapshot(30, "晴"));
        assert_eq!(hot.kind, SuggestionKind::Summer);
        assert_eq!(hot.items, vec!["轻薄上衣", "短裤/短裙", "凉鞋"]);

        assert_eq!(suggest_outfit(&snapshot(28, "晴")).kind, SuggestionKind::Summer);
        assert_eq!(suggest_outfit(&snapshot(18, "晴")).kind, SuggestionKind::Spring);
        assert_eq!(suggest_outfit(&snapshot(17, "晴")).kind, SuggestionKind::Autumn);
        assert_eq!(suggest_outfit(&snapshot(10, "晴")).kind, SuggestionKind::Autumn);
        assert_eq!(suggest_outfit(&snapshot(9, "晴")).kind, SuggestionKind::Winter);
        assert_eq!(suggest_outfit(&snapshot(-5, "晴")).kind, SuggestionKind::Winter);
    }

    #[test]
    fn test_suggestion_adds_rain_and_snow_gear() {
        let rainy = suggest_outfit(&snapshot(30, "雷阵雨"));
        assert_eq!(rainy.items.last().map(String::as_str), Some("雨伞"));
        assert_eq!(rainy.items.len(), 4);

        let snowy = suggest_outfit(&snapshot(-2, "雨夹雪"));
        assert_eq!(snowy.kind, SuggestionKind::Winter);
        assert_eq!(snowy.items[3..], ["雨伞".to_string(), "防水靴".to_string()]);
    }

    #[tokio::test]
    async fn test_outfit_suggestion_follows_loaded_weather() {
        let mut store = mock_store(Arc::new(MemoryStore::new()));
        assert!(store.outfit_suggestion().is_none());

        store.fetch_weather("广州").await;
        let suggestion = store.outfit_suggestion().unwrap();
        assert_eq!(suggestion.kind, SuggestionKind::Summer);
        assert!(suggestion.items.contains(&"雨伞".to_string()));
    }
}

//! Application state owning every store and service

use std::sync::Arc;

use anyhow::Result;
use common::{KeyValueStore, StorageResult, open_store};
use tracing::info;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::stores::{ItemStore, MockWeatherProvider, OutfitStore, UserStore, WeatherStore};
use crate::upload::UploadService;
use crate::wardrobe_service::WardrobeService;

/// Everything the application needs, built once at startup
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub items: ItemStore,
    pub outfits: OutfitStore,
    pub user: UserStore,
    pub weather: WeatherStore,
    pub uploads: UploadService,
    pub api: ApiClient,
}

impl AppState {
    /// Open the configured storage and build the state on top of it
    pub fn new(config: &AppConfig) -> Result<Self> {
        let storage = open_store(&config.storage)?;
        Ok(Self::with_storage(config, storage))
    }

    /// Build the state over an existing storage backend
    pub fn with_storage(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let provider = Arc::new(MockWeatherProvider::new(config.weather_delay));

        Self {
            items: ItemStore::new(storage.clone()),
            outfits: OutfitStore::new(storage.clone()),
            user: UserStore::new(storage.clone()),
            weather: WeatherStore::new(storage.clone(), provider)
                .with_location(config.default_city.clone()),
            uploads: UploadService::new(config.upload_delay),
            api: ApiClient::new(config.api_base_url.clone()),
            storage,
        }
    }

    /// Restore items, outfits and the user profile from storage
    pub fn load_all(&mut self) -> StorageResult<()> {
        self.items.load()?;
        self.outfits.load()?;
        self.user.init_user_info()?;
        info!(
            "Loaded {} items and {} outfits",
            self.items.items().len(),
            self.outfits.outfits().len()
        );
        Ok(())
    }

    pub fn wardrobe(&mut self) -> WardrobeService<'_> {
        WardrobeService::new(&mut self.items)
    }
}

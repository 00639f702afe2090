//! Wardrobe item store

use std::sync::Arc;

use chrono::Utc;
use common::{KeyValueStore, KeyValueStoreExt, StorageResult};
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::models::{Category, CategoryFilter, ItemPatch, ItemStats, NewItem, WardrobeItem};
use crate::stores::IdGenerator;

/// Storage key of the persisted item collection
pub const ITEMS_KEY: &str = "wardrobeItems";

/// Sample size used when callers have no preference
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// In-memory wardrobe items, newest first, mirrored to storage on every change
pub struct ItemStore {
    storage: Arc<dyn KeyValueStore>,
    items: Vec<WardrobeItem>,
    ids: IdGenerator,
}

impl ItemStore {
    /// Create an empty item store backed by `storage`
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            items: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    /// All items, newest first
    pub fn items(&self) -> &[WardrobeItem] {
        &self.items
    }

    /// The fixed category to display-name table
    pub fn category_map() -> Vec<(Category, String)> {
        Category::KNOWN
            .into_iter()
            .map(|category| {
                let name = category.display_name().to_string();
                (category, name)
            })
            .collect()
    }

    /// Replace the in-memory items with the persisted collection, if any
    pub fn load(&mut self) -> StorageResult<()> {
        if let Some(items) = self.storage.get_json::<Vec<WardrobeItem>>(ITEMS_KEY)? {
            debug!("Loaded {} wardrobe items", items.len());
            self.items = items;
        }
        Ok(())
    }

    fn save(&self) -> StorageResult<()> {
        self.storage.set_json(ITEMS_KEY, &self.items)
    }

    /// Create an item, place it first and persist the collection
    pub fn add(&mut self, item: NewItem) -> StorageResult<WardrobeItem> {
        let items = &self.items;
        let id = self.ids.next(|candidate| items.iter().any(|i| i.id == candidate));

        let record = WardrobeItem {
            id,
            category_name: item.category.display_name().to_string(),
            name: item.name,
            category: item.category,
            image: item.image,
            tags: item.tags,
            color: item.color,
            brand: item.brand,
            created_at: Utc::now(),
        };

        self.items.insert(0, record.clone());
        self.save()?;
        info!("Added wardrobe item {} ({})", record.id, record.name);
        Ok(record)
    }

    /// Merge `patch` into the item with `id`; unknown ids are ignored
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> StorageResult<()> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply(patch);
                self.save()?;
                debug!("Updated wardrobe item {}", id);
            }
            None => debug!("Ignoring update for unknown wardrobe item {}", id),
        }
        Ok(())
    }

    /// Remove the item with `id` and persist the collection
    pub fn delete(&mut self, id: &str) -> StorageResult<()> {
        self.items.retain(|item| item.id != id);
        self.save()?;
        debug!("Deleted wardrobe item {}", id);
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> Option<&WardrobeItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in `category`, or every item for [`CategoryFilter::All`]
    pub fn get_by_category(&self, category: impl Into<CategoryFilter>) -> Vec<&WardrobeItem> {
        let filter = category.into();
        self.items
            .iter()
            .filter(|item| filter.matches(&item.category))
            .collect()
    }

    /// Up to `count` items in random order
    pub fn get_random_sample(&self, count: usize) -> Vec<&WardrobeItem> {
        let mut shuffled: Vec<&WardrobeItem> = self.items.iter().collect();
        shuffled.shuffle(&mut rand::thread_rng());
        shuffled.truncate(count);
        shuffled
    }

    /// Total and per-category counts, computed on every call
    pub fn stats(&self) -> ItemStats {
        let by_category = Category::KNOWN
            .into_iter()
            .map(|category| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .count();
                (category, count)
            })
            .collect();

        ItemStats {
            total: self.items.len(),
            by_category,
        }
    }
}

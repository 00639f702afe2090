//! Outfit store

use std::sync::Arc;

use chrono::Utc;
use common::{KeyValueStore, KeyValueStoreExt, StorageResult};
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::models::{NewOutfit, Outfit, OutfitPatch};
use crate::stores::IdGenerator;

/// Storage key of the persisted outfit collection
pub const OUTFITS_KEY: &str = "outfits";

/// In-memory outfits, newest first, mirrored to storage on every change
pub struct OutfitStore {
    storage: Arc<dyn KeyValueStore>,
    outfits: Vec<Outfit>,
    ids: IdGenerator,
}

impl OutfitStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            outfits: Vec::new(),
            ids: IdGenerator::default(),
        }
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Replace the in-memory outfits with the persisted collection, if any
    pub fn load(&mut self) -> StorageResult<()> {
        if let Some(outfits) = self.storage.get_json::<Vec<Outfit>>(OUTFITS_KEY)? {
            debug!("Loaded {} outfits", outfits.len());
            self.outfits = outfits;
        }
        Ok(())
    }

    fn save(&self) -> StorageResult<()> {
        self.storage.set_json(OUTFITS_KEY, &self.outfits)
    }

    pub fn add(&mut self, outfit: NewOutfit) -> StorageResult<Outfit> {
        let outfits = &self.outfits;
        let id = self
            .ids
            .next(|candidate| outfits.iter().any(|o| o.id == candidate));

        let record = Outfit {
            id,
            name: outfit.name,
            description: outfit.description,
            image: outfit.image,
            tags: outfit.tags,
            items: outfit.items,
            created_at: Utc::now(),
        };

        self.outfits.insert(0, record.clone());
        self.save()?;
        info!("Added outfit {} ({})", record.id, record.name);
        Ok(record)
    }

    pub fn update(&mut self, id: &str, patch: OutfitPatch) -> StorageResult<()> {
        if let Some(outfit) = self.outfits.iter_mut().find(|outfit| outfit.id == id) {
            outfit.apply(patch);
            self.save()?;
            debug!("Updated outfit {}", id);
        }
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> StorageResult<()> {
        self.outfits.retain(|outfit| outfit.id != id);
        self.save()?;
        debug!("Deleted outfit {}", id);
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| outfit.id == id)
    }

    /// A uniformly chosen outfit, `None` when there are none
    pub fn get_random(&self) -> Option<&Outfit> {
        self.outfits.choose(&mut rand::thread_rng())
    }

    /// Currently the same as [`OutfitStore::get_random`]; no ranking is applied yet
    pub fn get_recommended(&self) -> Option<&Outfit> {
        self.get_random()
    }
}

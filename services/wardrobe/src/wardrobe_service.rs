//! Item operations that always start from the persisted collection

use common::StorageResult;
use tracing::info;

use crate::models::{ItemPatch, NewItem, WardrobeItem};
use crate::stores::ItemStore;

/// Façade over an [`ItemStore`] that reloads from storage before every call
pub struct WardrobeService<'a> {
    store: &'a mut ItemStore,
}

impl<'a> WardrobeService<'a> {
    pub fn new(store: &'a mut ItemStore) -> Self {
        Self { store }
    }

    pub fn get_items(&mut self) -> StorageResult<&[WardrobeItem]> {
        self.store.load()?;
        Ok(self.store.items())
    }

    pub fn get_item_by_id(&mut self, id: &str) -> StorageResult<Option<&WardrobeItem>> {
        self.store.load()?;
        Ok(self.store.get_by_id(id))
    }

    pub fn create_item(&mut self, item: NewItem) -> StorageResult<WardrobeItem> {
        self.store.load()?;
        self.store.add(item)
    }

    /// Apply `patch` and return the stored result, `None` for unknown ids
    pub fn update_item(
        &mut self,
        id: &str,
        patch: ItemPatch,
    ) -> StorageResult<Option<&WardrobeItem>> {
        self.store.load()?;
        self.store.update(id, patch)?;
        Ok(self.store.get_by_id(id))
    }

    pub fn delete_item(&mut self, id: &str) -> StorageResult<()> {
        self.store.load()?;
        self.store.delete(id)
    }

    pub fn batch_delete<I, S>(&mut self, ids: I) -> StorageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.load()?;
        let mut count = 0;
        for id in ids {
            self.store.delete(id.as_ref())?;
            count += 1;
        }
        info!("Batch deleted {} wardrobe items", count);
        Ok(())
    }

    /// Apply the same `patch` to every listed item
    pub fn batch_update<I, S>(&mut self, ids: I, patch: ItemPatch) -> StorageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.load()?;
        let mut count = 0;
        for id in ids {
            self.store.update(id.as_ref(), patch.clone())?;
            count += 1;
        }
        info!("Batch updated {} wardrobe items", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MemoryStore;
    use std::sync::Arc;

    fn item_store() -> ItemStore {
        ItemStore::new(Arc::new(MemoryStore::new()))
    }

    fn test_item(name: &str) -> NewItem {
        NewItem::new(name, "tops").with_image("x.jpg")
    }

    #[test]
    fn test_get_items_empty() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);
        assert!(service.get_items()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_create_and_get_item() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);

        let created = service.create_item(test_item("测试衣物"))?;
        assert!(!created.id.is_empty());
        assert_eq!(created.name, "测试衣物");

        assert_eq!(service.get_items()?.len(), 1);
        assert_eq!(service.get_item_by_id(&created.id)?, Some(&created));
        assert_eq!(service.get_item_by_id("non-existent")?, None);
        Ok(())
    }

    #[test]
    fn test_update_item_returns_updated_record() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);
        let created = service.create_item(test_item("旧名称"))?;

        let patch = ItemPatch {
            name: Some("新名称".to_string()),
            ..Default::default()
        };
        let updated = service.update_item(&created.id, patch.clone())?.cloned();
        assert_eq!(updated.map(|item| item.name), Some("新名称".to_string()));

        assert!(service.update_item("missing", patch)?.is_none());
        Ok(())
    }

    #[test]
    fn test_delete_item() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);
        let created = service.create_item(test_item("测试"))?;

        service.delete_item(&created.id)?;
        assert!(service.get_item_by_id(&created.id)?.is_none());
        Ok(())
    }

    #[test]
    fn test_batch_delete() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);
        let first = service.create_item(test_item("1"))?;
        let second = service.create_item(test_item("2"))?;
        let keep = service.create_item(test_item("3"))?;

        service.batch_delete([&first.id, &second.id])?;

        let remaining = service.get_items()?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);

        service.batch_delete(Vec::<String>::new())?;
        assert_eq!(service.get_items()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_batch_update() -> StorageResult<()> {
        let mut store = item_store();
        let mut service = WardrobeService::new(&mut store);
        let first = service.create_item(test_item("1"))?;
        let second = service.create_item(test_item("2"))?;

        service.batch_update(
            [first.id.as_str(), second.id.as_str()],
            ItemPatch {
                brand: Some("优衣库".to_string()),
                ..Default::default()
            },
        )?;

        assert!(service
            .get_items()?
            .iter()
            .all(|item| item.brand.as_deref() == Some("优衣库")));
        Ok(())
    }

    #[test]
    fn test_reads_see_changes_made_through_another_store() -> StorageResult<()> {
        let storage = Arc::new(MemoryStore::new());
        let mut writer = ItemStore::new(storage.clone());
        let mut reader = ItemStore::new(storage);

        let created = writer.add(test_item("共享"))?;

        let mut service = WardrobeService::new(&mut reader);
        assert_eq!(service.get_item_by_id(&created.id)?, Some(&created));
        Ok(())
    }
}

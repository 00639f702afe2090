//! Integration tests for the application state
//!
//! These tests drive the stores through `AppState` over a file-backed
//! storage directory and verify that a restarted state sees the same data.

use std::sync::Arc;
use std::time::Duration;

use common::{FileStore, KeyValueStore};
use wardrobe::{
    AppConfig, AppState,
    models::{Category, ItemPatch, NewItem, NewOutfit, SuggestionKind, UserPatch},
    stores::{ITEMS_KEY, USER_KEY, WEATHER_CACHE_KEY},
    tags::recommend_tags,
};

fn test_config(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig {
        weather_delay: Duration::ZERO,
        upload_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    config.storage.data_dir = Some(dir.to_path_buf());
    config
}

#[tokio::test]
async fn test_state_survives_restart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());

    let (shirt_id, outfit_id) = {
        let mut state = AppState::new(&config)?;
        state.load_all()?;

        let shirt = state.items.add(
            NewItem::new("白色T恤", "tops")
                .with_image("t-shirt.jpg")
                .with_tags(recommend_tags("tops").occasions.iter().copied()),
        )?;
        state.items.add(NewItem::new("牛仔裤", Category::Bottoms))?;
        let outfit = state.outfits.add(NewOutfit {
            name: "周末".to_string(),
            items: Some(vec![shirt.id.clone()]),
            ..Default::default()
        })?;
        state.user.set_user_info(UserPatch {
            id: Some("user-1".to_string()),
            nickname: Some("小明".to_string()),
            ..Default::default()
        })?;
        state.weather.fetch_weather("上海").await;

        (shirt.id, outfit.id)
    };

    let mut restarted = AppState::new(&config)?;
    restarted.load_all()?;

    assert_eq!(restarted.items.items().len(), 2);
    let shirt = restarted.items.get_by_id(&shirt_id).unwrap();
    assert_eq!(shirt.category_name, "上衣");
    assert_eq!(shirt.tags.as_ref().map(Vec::len), Some(4));

    let outfit = restarted.outfits.get_by_id(&outfit_id).unwrap();
    assert_eq!(outfit.items.as_deref(), Some(&[shirt_id.clone()][..]));

    assert!(restarted.user.is_logged_in());
    assert_eq!(restarted.user.user_info().nickname, "小明");

    let store = FileStore::open(dir.path())?;
    assert!(store.get(ITEMS_KEY)?.is_some());
    assert!(store.get(USER_KEY)?.is_some());
    assert!(store.get(WEATHER_CACHE_KEY)?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_wardrobe_service_over_shared_storage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir.path())?);

    let mut state = AppState::with_storage(&config, storage.clone());
    let mut other = AppState::with_storage(&config, storage);

    let created = other.items.add(NewItem::new("风衣", "outerwear"))?;

    // The façade reloads, so it sees items written by another state
    let mut wardrobe = state.wardrobe();
    assert_eq!(wardrobe.get_items()?.len(), 1);

    wardrobe.batch_update(
        [created.id.as_str()],
        ItemPatch {
            color: Some("卡其".to_string()),
            ..Default::default()
        },
    )?;
    let updated = wardrobe.get_item_by_id(&created.id)?.cloned().unwrap();
    assert_eq!(updated.color.as_deref(), Some("卡其"));
    assert_eq!(updated.category_name, "外套");

    wardrobe.batch_delete([created.id])?;
    assert!(wardrobe.get_items()?.is_empty());

    other.items.load()?;
    assert!(other.items.items().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_weather_suggestion_and_uploads() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut state = AppState::new(&test_config(dir.path()))?;

    assert!(state.weather.outfit_suggestion().is_none());
    assert_eq!(state.weather.location(), "北京");

    let weather = state.weather.refresh().await.cloned().unwrap();
    assert_eq!(weather.city, "北京");
    assert_eq!(
        state.weather.outfit_suggestion().map(|s| s.kind),
        Some(SuggestionKind::Spring)
    );

    let uploads = state
        .uploads
        .upload_images(&["front.jpg", "back.jpg"])
        .await;
    assert_eq!(uploads[0].url, "front.jpg");
    assert_eq!(uploads[1].url, "back.jpg");
    Ok(())
}

#[tokio::test]
async fn test_logout_removes_persisted_profile() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path());

    let mut state = AppState::new(&config)?;
    state.user.set_user_info(UserPatch {
        nickname: Some("测试用户".to_string()),
        ..Default::default()
    })?;
    state.user.logout()?;

    let mut restarted = AppState::new(&config)?;
    restarted.load_all()?;
    assert!(!restarted.user.is_logged_in());
    assert_eq!(restarted.user.user_info().nickname, "");
    Ok(())
}

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use wardrobe::{AppConfig, AppState, stores::DEFAULT_SAMPLE_SIZE};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting wardrobe service");

    let config = AppConfig::from_env()?;
    let mut state = AppState::new(&config)?;
    state.load_all()?;

    let stats = state.items.stats();
    info!("Wardrobe holds {} items", stats.total);
    for (category, count) in &stats.by_category {
        info!("  {} ({}): {}", category.display_name(), category, count);
    }

    for item in state.items.get_random_sample(DEFAULT_SAMPLE_SIZE) {
        info!("Today's pick: {} [{}]", item.name, item.category_name);
    }

    match state.outfits.get_recommended() {
        Some(outfit) => info!("Recommended outfit: {}", outfit.name),
        None => info!("No outfits saved yet"),
    }

    if state.user.is_logged_in() {
        info!("Signed in as {}", state.user.user_info().nickname);
    }

    let city = config.default_city.clone();
    match state.weather.fetch_weather(&city).await {
        Some(weather) => info!(
            "{}: {} {}°C ({}~{}°C), {}",
            weather.city,
            weather.condition,
            weather.temp,
            weather.temp_min,
            weather.temp_max,
            weather.dress_suggestion
        ),
        None => info!("Weather unavailable for {}", city),
    }

    if let Some(suggestion) = state.weather.outfit_suggestion() {
        info!(
            "Suggested {} outfit: {}",
            suggestion.kind.as_str(),
            suggestion.items.join(", ")
        );
    }

    Ok(())
}

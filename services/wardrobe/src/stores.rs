//! Stores holding the in-memory state, mirrored to local storage

use chrono::Utc;

pub mod item;
pub mod outfit;
pub mod user;
pub mod weather;

pub use item::{DEFAULT_SAMPLE_SIZE, ITEMS_KEY, ItemStore};
pub use outfit::{OUTFITS_KEY, OutfitStore};
pub use user::{USER_KEY, UserStore};
pub use weather::{
    DEFAULT_CITY, MockWeatherProvider, WEATHER_CACHE_KEY, WeatherProvider, WeatherStore,
    suggest_outfit,
};

/// Issues record ids from the current time in milliseconds
///
/// Ids never repeat within one generator and skip any id still in use, so two
/// records created in the same millisecond get consecutive values.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub(crate) fn next(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while is_taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}

//! Domain models for wardrobe items, outfits, the user profile and weather

pub mod item;
pub mod outfit;
pub mod user;
pub mod weather;

pub use item::{Category, CategoryFilter, ItemPatch, ItemStats, NewItem, WardrobeItem};
pub use outfit::{NewOutfit, Outfit, OutfitPatch};
pub use user::{UserPatch, UserProfile};
pub use weather::{CachedWeather, OutfitSuggestion, SuggestionKind, WeatherSnapshot};

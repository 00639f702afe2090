//! Wardrobe organizer core
//!
//! Stores for wardrobe items, outfits, the user profile and weather, each
//! mirrored to a local key-value store, plus the static tag vocabularies,
//! an upload stub and a placeholder REST client.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod stores;
pub mod tags;
pub mod upload;
pub mod wardrobe_service;

pub use config::AppConfig;
pub use state::AppState;

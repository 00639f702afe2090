//! Common library for the wardrobe application
//!
//! This crate provides shared functionality used by the wardrobe service,
//! including the local key-value storage layer and its error handling.

pub mod error;
pub mod storage;

pub use error::{StorageError, StorageResult};
pub use storage::{
    FileStore, KeyValueStore, KeyValueStoreExt, MemoryStore, StorageConfig, open_store,
};

//! Durable slot boundary for the inventory collection.
//!
//! The whole collection is stored as one JSON array under one fixed key.
//! Implementations are chosen at construction time from configuration.

pub mod file;
pub mod in_memory;
pub mod r#trait;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};

pub use file::FileSlotStore;
pub use in_memory::InMemoryInventoryStore;
pub use r#trait::{decode_items, encode_items, InventoryStore, StoreError};

/// Build the configured store implementation.
pub fn build_store(config: &StorageConfig) -> Arc<dyn InventoryStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryInventoryStore::new()),
        StorageBackend::File => Arc::new(FileSlotStore::new(&config.data_dir, &config.slot_key)),
    }
}

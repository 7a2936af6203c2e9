//! Infrastructure layer: durable slot storage, configuration, and the
//! inventory repository that ties the domain to storage.

pub mod config;
pub mod repository;
pub mod store;

pub use config::{StockroomConfig, StorageBackend, StorageConfig};
pub use repository::InventoryRepository;
pub use store::{build_store, FileSlotStore, InMemoryInventoryStore, InventoryStore, StoreError};

//! Service wiring: the one repository instance shared by all handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use stockroom_infra::{build_store, InventoryRepository, InventoryStore, StockroomConfig};

/// Repository over whichever store configuration selected.
pub type Repository = InventoryRepository<Arc<dyn InventoryStore>>;

/// Shared application services.
///
/// Handlers lock the repository for exactly one operation, so requests are
/// applied one at a time against the single in-memory copy.
pub struct AppServices {
    repository: Mutex<Repository>,
}

impl AppServices {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository: Mutex::new(repository),
        }
    }

    /// Open the repository on the configured store (seeding if the slot is empty).
    pub fn from_config(config: &StockroomConfig) -> Self {
        let store = build_store(&config.storage);
        Self::new(InventoryRepository::open(store))
    }

    /// Open over an explicit store.
    pub fn with_store(store: Arc<dyn InventoryStore>) -> Self {
        Self::new(InventoryRepository::open(store))
    }

    pub fn repository(&self) -> MutexGuard<'_, Repository> {
        // Repository operations never leave partial writes; poisoning is recovered.
        self.repository
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use stockroom_inventory::InventoryItem;

use super::r#trait::{decode_items, encode_items, InventoryStore, StoreError};

/// In-memory slot for tests/dev.
///
/// Keeps the serialized payload rather than the items so that round-trips go
/// through the same JSON format as the file slot.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    slot: RwLock<Option<String>>,
    saves: AtomicUsize,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-filled slot (possibly malformed).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
            saves: AtomicUsize::new(0),
        }
    }

    /// Raw slot contents, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StoreError::Storage("slot lock poisoned".to_string()))?;
        slot.as_deref().map(decode_items).transpose()
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        let payload = encode_items(items)?;
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StoreError::Storage("slot lock poisoned".to_string()))?;
        *slot = Some(payload);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

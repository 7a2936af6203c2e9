use std::sync::Arc;

use thiserror::Error;

use stockroom_inventory::InventoryItem;

/// Storage abstraction holding one snapshot of the full item collection.
///
/// `load` returns `Ok(None)` when the slot has never been written. Callers
/// decide how to degrade on `Err` (the repository falls back to seed data).
pub trait InventoryStore: Send + Sync {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError>;

    /// Replace the stored snapshot with `items`.
    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StoreError> {
        (**self).save(items)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("slot contents are not a valid inventory snapshot: {0}")]
    Corrupt(String),

    #[error("failed to serialize inventory snapshot: {0}")]
    Serialize(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Serialize the collection in the slot format (a JSON array).
pub fn encode_items(items: &[InventoryItem]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|e| StoreError::Serialize(e.to_string()))
}

/// Parse a slot payload back into items.
pub fn decode_items(raw: &str) -> Result<Vec<InventoryItem>, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupt(e.to_string()))
}

//! Inventory repository: the canonical item collection plus persistence.
//!
//! The repository owns a single in-memory `Vec<InventoryItem>` and mirrors it
//! into an [`InventoryStore`] after every mutation. Reads never touch the
//! store and always hand out owned copies.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use stockroom_core::{DomainError, DomainResult, Entity};
use stockroom_inventory::{
    ensure_unique_ids, next_item_id, sample_items, InventoryItem, InventoryStats, ItemFilter,
    ItemId, NewItem, StockFilter,
};

use crate::store::InventoryStore;

/// Source of `last_updated` stamps.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug)]
pub struct InventoryRepository<S>
where
    S: InventoryStore,
{
    store: S,
    items: Vec<InventoryItem>,
    clock: Clock,
}

impl<S> InventoryRepository<S>
where
    S: InventoryStore,
{
    /// Open over `store`, falling back to the built-in sample data.
    pub fn open(store: S) -> Self {
        Self::open_with_seed(store, sample_items())
    }

    /// Open over `store`, falling back to `seed` when nothing usable is persisted.
    ///
    /// The resulting collection is written back immediately so the slot always
    /// holds a readable snapshot.
    pub fn open_with_seed(store: S, seed: Vec<InventoryItem>) -> Self {
        let items = match store.load() {
            Ok(Some(items)) => match ensure_unique_ids(&items) {
                Ok(()) => {
                    tracing::info!(items = items.len(), "restored persisted inventory");
                    items
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted inventory rejected; seeding");
                    seed
                }
            },
            Ok(None) => {
                tracing::info!(items = seed.len(), "no persisted inventory; seeding");
                seed
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted inventory unreadable; seeding");
                seed
            }
        };

        let repo = Self {
            store,
            items,
            clock: Utc::now,
        };
        repo.persist();
        repo
    }

    /// Replace the timestamp source (tests use a fixed clock).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_all(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }

    pub fn get(&self, id: ItemId) -> Option<InventoryItem> {
        self.position(id).map(|idx| self.items[idx].clone())
    }

    pub fn add(&mut self, candidate: NewItem) -> DomainResult<InventoryItem> {
        candidate.validate()?;

        let id = next_item_id(&self.items)?;
        let item = InventoryItem::from_new(id, candidate, (self.clock)());
        self.items.push(item.clone());
        self.persist();

        tracing::debug!(item_id = %id, "inventory item added");
        Ok(item)
    }

    /// Replace the stored item with the same id. `Ok(None)` when unknown.
    pub fn update(&mut self, item: InventoryItem) -> DomainResult<Option<InventoryItem>> {
        item.validate()?;

        let Some(idx) = self.position(item.id) else {
            return Ok(None);
        };

        let mut stored = item;
        stored.last_updated = (self.clock)();
        self.items[idx] = stored.clone();
        self.persist();

        tracing::debug!(item_id = %stored.id, "inventory item updated");
        Ok(Some(stored))
    }

    /// Set an item's quantity, keeping every other field.
    pub fn adjust_quantity(
        &mut self,
        id: ItemId,
        quantity: i64,
    ) -> DomainResult<Option<InventoryItem>> {
        if quantity < 0 {
            return Err(DomainError::validation("quantity must be a non-negative number"));
        }
        let Some(mut item) = self.get(id) else {
            return Ok(None);
        };
        item.quantity = quantity;
        self.update(item)
    }

    pub fn delete(&mut self, id: ItemId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };

        self.items.remove(idx);
        self.persist();

        tracing::debug!(item_id = %id, "inventory item deleted");
        true
    }

    pub fn out_of_stock(&self) -> Vec<InventoryItem> {
        self.filter(&ItemFilter::new().stock_status(StockFilter::Out))
    }

    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.filter(&ItemFilter::new().stock_status(StockFilter::Low))
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(&self.items)
    }

    pub fn filter(&self, filter: &ItemFilter) -> Vec<InventoryItem> {
        filter.apply(&self.items)
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.items.iter().map(|item| item.category.clone()).collect()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| *item.id() == id)
    }

    /// Best-effort write-through; the in-memory copy stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            tracing::warn!(error = %e, items = self.items.len(), "failed to persist inventory");
        }
    }
}

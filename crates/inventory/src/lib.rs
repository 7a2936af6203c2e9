//! Inventory domain module.
//!
//! This crate contains business rules for inventory items (classification,
//! validation, filtering, statistics), implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod item;
pub mod seed;
pub mod stats;

pub use filter::{ItemFilter, StockFilter};
pub use item::{
    ensure_unique_ids, next_item_id, InventoryItem, ItemId, NewItem, StockStatus,
};
pub use seed::sample_items;
pub use stats::InventoryStats;

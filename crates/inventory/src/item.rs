use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity};

/// Inventory item identifier, assigned by the repository (max existing id + 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows `self` in assignment order, if any.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Derived stock classification (pure function of quantity and threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn classify(quantity: i64, threshold: i64) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity > 0 && quantity <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored inventory record.
///
/// Serialized with camelCase keys; `price` is written as a JSON number carrying
/// every decimal digit, so the persisted slot keeps the shape `{id, name,
/// category, quantity, price, threshold, supplier, lastUpdated}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub threshold: i64,
    #[serde(default)]
    pub supplier: String,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Materialize a candidate under a repository-assigned id and timestamp.
    pub fn from_new(id: ItemId, candidate: NewItem, stamped_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: candidate.name,
            category: candidate.category,
            quantity: candidate.quantity,
            price: candidate.price,
            threshold: candidate.threshold,
            supplier: candidate.supplier,
            last_updated: stamped_at,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.threshold)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_status() == StockStatus::OutOfStock
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_status() == StockStatus::LowStock
    }

    /// `quantity * price`, saturating at `Decimal::MIN`/`Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(
            &self.name,
            &self.category,
            self.quantity,
            self.price,
            self.threshold,
        )
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Candidate for `add`: an item without `id`/`last_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub threshold: i64,
    #[serde(default)]
    pub supplier: String,
}

impl NewItem {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(
            &self.name,
            &self.category,
            self.quantity,
            self.price,
            self.threshold,
        )
    }
}

fn validate_fields(
    name: &str,
    category: &str,
    quantity: i64,
    price: Decimal,
    threshold: i64,
) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    if category.trim().is_empty() {
        return Err(DomainError::validation("category is required"));
    }
    if quantity < 0 {
        return Err(DomainError::validation("quantity must be a non-negative number"));
    }
    if price <= Decimal::ZERO {
        return Err(DomainError::validation("price must be a positive number"));
    }
    if threshold < 0 {
        return Err(DomainError::validation("threshold must be a non-negative number"));
    }
    if Decimal::from(quantity).checked_mul(price).is_none() {
        return Err(DomainError::validation("quantity * price exceeds the representable value"));
    }
    Ok(())
}

/// Next id for a collection: max existing id + 1, or 1 when empty.
pub fn next_item_id(items: &[InventoryItem]) -> DomainResult<ItemId> {
    match items.iter().map(|item| *item.id()).max() {
        None => Ok(ItemId(1)),
        Some(max) => max
            .checked_next()
            .ok_or_else(|| DomainError::invariant(format!("no item id follows {max}"))),
    }
}

/// Reject collections that carry the same id twice.
pub fn ensure_unique_ids(items: &[InventoryItem]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(DomainError::invariant(format!("duplicate item id {}", item.id)));
        }
    }
    Ok(())
}

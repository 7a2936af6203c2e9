//! Listing filters: search term, category, stock status.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;

use crate::item::{InventoryItem, StockStatus};

/// Stock status selector used by the listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    #[default]
    All,
    /// `quantity == 0`
    Out,
    /// `0 < quantity <= threshold`
    Low,
    /// `quantity > threshold`
    Normal,
}

impl StockFilter {
    pub fn matches(self, item: &InventoryItem) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::Out => item.stock_status() == StockStatus::OutOfStock,
            StockFilter::Low => item.stock_status() == StockStatus::LowStock,
            StockFilter::Normal => item.quantity > item.threshold,
        }
    }
}

impl FromStr for StockFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "all" => Ok(StockFilter::All),
            "out" => Ok(StockFilter::Out),
            "low" => Ok(StockFilter::Low),
            "normal" => Ok(StockFilter::Normal),
            other => Err(DomainError::validation(format!(
                "stock status must be one of: all, out, low, normal (got {other:?})"
            ))),
        }
    }
}

/// Conjunctive listing filter. Empty `search_term`/`category` act as wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    pub search_term: String,
    pub category: String,
    pub stock_status: StockFilter,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn stock_status(mut self, status: StockFilter) -> Self {
        self.stock_status = status;
        self
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matches_search(item)
            && (self.category.is_empty() || item.category == self.category)
            && self.stock_status.matches(item)
    }

    fn matches_search(&self, item: &InventoryItem) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        item.name.to_lowercase().contains(&needle) || item.supplier.to_lowercase().contains(&needle)
    }

    /// Apply to a collection, preserving order and returning owned copies.
    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

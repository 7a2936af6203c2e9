//! Aggregate statistics over an item collection.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::{InventoryItem, StockStatus};

/// Summary figures shown by the stats view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    /// Sum of `quantity * price` over all items.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_value: Decimal,
    pub out_of_stock: usize,
    pub low_stock: usize,
    /// Everything that is neither out of stock nor low.
    pub in_stock: usize,
    /// Category name -> summed quantity. Only categories with items appear.
    pub categories: BTreeMap<String, i64>,
}

impl InventoryStats {
    /// Both sums saturate: `total_value` at `Decimal::MAX`, category
    /// quantities at `i64::MAX`.
    pub fn compute(items: &[InventoryItem]) -> Self {
        let mut stats = InventoryStats {
            total_items: items.len(),
            ..Default::default()
        };

        for item in items {
            stats.total_value = stats.total_value.saturating_add(item.stock_value());
            match item.stock_status() {
                StockStatus::OutOfStock => stats.out_of_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::InStock => stats.in_stock += 1,
            }
            let quantity = stats.categories.entry(item.category.clone()).or_insert(0);
            *quantity = quantity.saturating_add(item.quantity);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_items;
    use std::str::FromStr;

    #[test]
    fn empty_collection_has_zero_value() {
        let stats = InventoryStats::compute(&[]);
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.total_value, Decimal::ZERO);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn seed_data_figures() {
        let stats = InventoryStats::compute(&sample_items());

        assert_eq!(stats.total_items, 8);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.in_stock, 6);
        assert_eq!(stats.total_value, Decimal::from_str("22359.00").unwrap());

        assert_eq!(stats.categories.get("Electronics"), Some(&26));
        assert_eq!(stats.categories.get("Furniture"), Some(&30));
        assert_eq!(stats.categories.get("Lighting"), Some(&12));
        assert_eq!(stats.categories.get("Office Supplies"), Some(&32));
        assert_eq!(stats.categories.len(), 4);
    }

    #[test]
    fn oversized_collections_saturate_instead_of_overflowing() {
        let mut items = sample_items();
        items[0].quantity = i64::MAX;
        items[0].price = Decimal::MAX;
        items[2].quantity = i64::MAX;

        let stats = InventoryStats::compute(&items);
        assert_eq!(stats.total_value, Decimal::MAX);
        assert_eq!(stats.categories.get("Electronics"), Some(&i64::MAX));
        assert_eq!(stats.categories.get("Furniture"), Some(&30));
    }

    #[test]
    fn serializes_with_original_keys() {
        let stats = InventoryStats::compute(&sample_items());
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalItems"], 8);
        assert_eq!(value["outOfStock"], 1);
        assert_eq!(value["categories"]["Lighting"], 12);
    }
}

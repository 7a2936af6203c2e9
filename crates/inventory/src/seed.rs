//! Built-in sample data used when no persisted collection exists.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::item::{InventoryItem, ItemId};

struct Sample {
    id: u64,
    name: &'static str,
    category: &'static str,
    quantity: i64,
    /// Price in cents.
    price: i64,
    threshold: i64,
    supplier: &'static str,
    /// Day of June 2023.
    updated_day: u32,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 1,
        name: "Laptop",
        category: "Electronics",
        quantity: 15,
        price: 99_999,
        threshold: 5,
        supplier: "Tech Solutions Inc.",
        updated_day: 1,
    },
    Sample {
        id: 2,
        name: "Office Chair",
        category: "Furniture",
        quantity: 25,
        price: 14_999,
        threshold: 8,
        supplier: "Comfort Furniture Co.",
        updated_day: 10,
    },
    Sample {
        id: 3,
        name: "Wireless Mouse",
        category: "Electronics",
        quantity: 4,
        price: 2_999,
        threshold: 10,
        supplier: "Tech Solutions Inc.",
        updated_day: 15,
    },
    Sample {
        id: 4,
        name: "Desk Lamp",
        category: "Lighting",
        quantity: 12,
        price: 3_499,
        threshold: 5,
        supplier: "Lightning Fixtures Ltd.",
        updated_day: 7,
    },
    Sample {
        id: 5,
        name: "Printer Paper",
        category: "Office Supplies",
        quantity: 32,
        price: 999,
        threshold: 15,
        supplier: "Office Essentials",
        updated_day: 12,
    },
    Sample {
        id: 6,
        name: "Ink Cartridge",
        category: "Office Supplies",
        quantity: 0,
        price: 2_499,
        threshold: 8,
        supplier: "Office Essentials",
        updated_day: 5,
    },
    Sample {
        id: 7,
        name: "Monitor",
        category: "Electronics",
        quantity: 7,
        price: 24_999,
        threshold: 3,
        supplier: "Tech Solutions Inc.",
        updated_day: 3,
    },
    Sample {
        id: 8,
        name: "Desk",
        category: "Furniture",
        quantity: 5,
        price: 19_999,
        threshold: 2,
        supplier: "Comfort Furniture Co.",
        updated_day: 2,
    },
];

fn june_2023(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// The fixed sample collection, in id order.
pub fn sample_items() -> Vec<InventoryItem> {
    SAMPLES
        .iter()
        .map(|s| InventoryItem {
            id: ItemId(s.id),
            name: s.name.to_string(),
            category: s.category.to_string(),
            quantity: s.quantity,
            price: Decimal::new(s.price, 2),
            threshold: s.threshold,
            supplier: s.supplier.to_string(),
            last_updated: june_2023(s.updated_day),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ensure_unique_ids;

    #[test]
    fn samples_are_valid_and_unique() {
        let items = sample_items();
        assert_eq!(items.len(), 8);
        assert!(ensure_unique_ids(&items).is_ok());
        for item in &items {
            assert!(item.validate().is_ok(), "sample {} should validate", item.id);
        }
    }

    #[test]
    fn documented_examples_classify_as_expected() {
        let items = sample_items();
        let ink = &items[5];
        assert_eq!(ink.name, "Ink Cartridge");
        assert!(ink.is_out_of_stock());
        assert_eq!(ink.price, Decimal::new(2499, 2));

        let mouse = &items[2];
        assert!(mouse.is_low_stock());

        let laptop = &items[0];
        assert!(!laptop.is_low_stock() && !laptop.is_out_of_stock());
        assert_eq!(laptop.last_updated.to_rfc3339(), "2023-06-01T00:00:00+00:00");
    }
}

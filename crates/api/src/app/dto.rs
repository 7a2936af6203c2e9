use serde::{Deserialize, Serialize};

use stockroom_inventory::{InventoryItem, ItemFilter, StockFilter, StockStatus};

// -------------------------
// Request DTOs
// -------------------------

/// Query string for `GET /inventory/items`.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub stock_status: Option<String>,
}

impl ListItemsQuery {
    pub fn into_filter(self) -> Result<ItemFilter, stockroom_core::DomainError> {
        let stock_status = match self.stock_status.as_deref() {
            Some(s) => s.parse::<StockFilter>()?,
            None => StockFilter::All,
        };
        Ok(ItemFilter {
            search_term: self.search.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            stock_status,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    pub quantity: i64,
}

// -------------------------
// Response DTOs
// -------------------------

/// Item plus its derived stock classification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
}

impl From<InventoryItem> for ItemResponse {
    fn from(item: InventoryItem) -> Self {
        let status = item.stock_status();
        Self {
            item,
            stock_status: status,
            stock_label: status.label(),
        }
    }
}

pub fn items_to_json(items: Vec<InventoryItem>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}

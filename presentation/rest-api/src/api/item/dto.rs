use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Optional item description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Item price (must be non-negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Item price (must be non-negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Item description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Item price
    pub price: f64,
    /// Creation timestamp
    pub create_date: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            price: item.price,
            create_date: item.create_date,
        }
    }
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::Item;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub create_date: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.create_date,
        )
    }
}

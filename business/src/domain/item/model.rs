use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ItemError;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub create_date: DateTime<Utc>,
}

pub struct NewItemProps {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        if props.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        if props.price < 0.0 {
            return Err(ItemError::PriceNegative);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            create_date: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: f64,
        create_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            create_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_id_and_create_date_when_created() {
        let before = Utc::now();
        let item = Item::new(NewItemProps {
            name: "Bronze Sword".to_string(),
            description: Some("A basic sword".to_string()),
            price: 10.5,
        })
        .unwrap();
        let after = Utc::now();

        assert!(!item.id.is_nil());
        assert!(item.create_date >= before && item.create_date <= after);
        assert_eq!(item.name, "Bronze Sword");
        assert_eq!(item.price, 10.5);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = Item::new(NewItemProps {
            name: "   ".to_string(),
            description: None,
            price: 1.0,
        });

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Item::new(NewItemProps {
            name: "Potion".to_string(),
            description: None,
            price: -0.5,
        });

        assert!(matches!(result.unwrap_err(), ItemError::PriceNegative));
    }

    #[test]
    fn should_generate_unique_ids() {
        let props = || NewItemProps {
            name: "Potion".to_string(),
            description: None,
            price: 9.0,
        };
        let first = Item::new(props()).unwrap();
        let second = Item::new(props()).unwrap();

        assert_ne!(first.id, second.id);
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        if params.price < 0.0 {
            return Err(ItemError::PriceNegative);
        }

        // Verify item exists; write happens in a second call (no atomicity).
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        // Only name and price are mutable; description and create_date
        // carry over from the stored item.
        let updated_item = Item::from_repository(
            existing.id,
            params.name,
            existing.description,
            params.price,
            existing.create_date,
        );

        self.repository.update(&updated_item).await?;

        self.logger
            .info(&format!("Item updated: {}", updated_item.id));
        Ok(updated_item)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        self.logger.info("Fetching all items");
        let mut items = self.repository.get_all().await?;

        if let Some(filter) = params.name_filter {
            let needle = filter.to_lowercase();
            items.retain(|item| item.name.to_lowercase().contains(&needle));
        }

        self.logger.info(&format!("Retrieved {} items", items.len()));
        Ok(items)
    }
}

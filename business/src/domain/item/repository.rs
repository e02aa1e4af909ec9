use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
    async fn create(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

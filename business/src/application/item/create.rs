use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItemProps};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let item = Item::new(NewItemProps {
            name: params.name,
            description: params.description,
            price: params.price,
        })?;

        self.repository.create(&item).await?;

        self.logger.info(&format!("Item created with id: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: uuid::Uuid) -> Result<Item, RepositoryError>;
            async fn create(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn delete(&self, id: uuid::Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_item_when_valid() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_create().returning(|_| Ok(()));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let before = Utc::now();
        let result = use_case
            .execute(CreateItemParams {
                name: "Bronze Sword".to_string(),
                description: Some("A basic sword".to_string()),
                price: 10.5,
            })
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Bronze Sword");
        assert_eq!(item.description, Some("A basic sword".to_string()));
        assert_eq!(item.price, 10.5);
        assert!(!item.id.is_nil());
        assert!(item.create_date >= before && item.create_date <= Utc::now());
    }

    #[tokio::test]
    async fn should_reject_item_when_name_is_empty() {
        let mock_repo = MockItemRepo::new();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                name: "".to_string(),
                description: None,
                price: 1.0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_item_when_price_is_negative() {
        let mock_repo = MockItemRepo::new();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                name: "Potion".to_string(),
                description: None,
                price: -3.0,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::PriceNegative));
    }

    #[tokio::test]
    async fn should_propagate_duplicated_key_from_repository() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                name: "Potion".to_string(),
                description: None,
                price: 3.0,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::Duplicated)
        ));
    }
}

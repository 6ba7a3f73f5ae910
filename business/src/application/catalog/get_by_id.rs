use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_product_by_id(&params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
            async fn get_products_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn update_product(&self, product: &Product) -> Result<bool, RepositoryError>;
            async fn delete_product(&self, id: &str) -> Result<bool, RepositoryError>;
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
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_product_by_id()
            .withf(|id| id == "602d2149e773f2a3990b47f5")
            .returning(|id| {
                Ok(Some(Product::from_repository(
                    id.to_string(),
                    "IPhone X".to_string(),
                    "Smart Phone".to_string(),
                    "Summary".to_string(),
                    "Description".to_string(),
                    "product-1.png".to_string(),
                    950.0,
                )))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: "602d2149e773f2a3990b47f5".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, "602d2149e773f2a3990b47f5");
        assert_eq!(product.name, "IPhone X");
    }

    #[tokio::test]
    async fn should_signal_not_found_when_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_product_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "602d2149e773f2a3990b47f5".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}

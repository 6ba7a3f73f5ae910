use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::logger::Logger;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // No existence check; a miss comes back as `false`, not an error.
        let removed = self.repository.delete_product(&params.id).await?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Product;
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
    async fn should_return_true_when_document_removed() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete_product()
            .withf(|id| id == "602d2149e773f2a3990b47f5")
            .returning(|_| Ok(true));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(DeleteProductParams {
                id: "602d2149e773f2a3990b47f5".to_string(),
            })
            .await
            .unwrap();

        assert!(removed);
    }

    #[tokio::test]
    async fn should_return_false_for_unknown_id_without_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete_product().returning(|_| Ok(false));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(DeleteProductParams {
                id: "ffffffffffffffffffffffff".to_string(),
            })
            .await
            .unwrap();

        assert!(!removed);
    }
}

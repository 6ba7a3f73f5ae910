use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_by_name::{
    GetProductsByNameParams, GetProductsByNameUseCase,
};
use crate::domain::logger::Logger;

pub struct GetProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByNameUseCase for GetProductsByNameUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByNameParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products by name: {}", params.name));

        let products = self.repository.get_products_by_name(&params.name).await?;

        Ok(products)
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
    async fn should_return_matching_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_products_by_name()
            .withf(|name| name == "IPhone X")
            .returning(|name| {
                Ok(vec![Product::from_repository(
                    "602d2149e773f2a3990b47f5".to_string(),
                    name.to_string(),
                    "Smart Phone".to_string(),
                    "Summary".to_string(),
                    "Description".to_string(),
                    "product-1.png".to_string(),
                    950.0,
                )])
            });

        let use_case = GetProductsByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByNameParams {
                name: "IPhone X".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_matches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_products_by_name()
            .returning(|_| Ok(vec![]));

        let use_case = GetProductsByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByNameParams {
                name: "Unknown".to_string(),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products by category: {}",
            params.category
        ));

        let products = self
            .repository
            .get_products_by_category(&params.category)
            .await?;

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
    async fn should_filter_by_exact_category() {
        // "Shoes" must not match a product categorized as "shoes"; the
        // filter is case-sensitive equality, so only exact-case matches
        // come back from the repository.
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_products_by_category()
            .withf(|category| category == "Shoes")
            .returning(|category| {
                Ok(vec![Product::from_repository(
                    "602d2149e773f2a3990b47f7".to_string(),
                    "Runner".to_string(),
                    category.to_string(),
                    "Summary".to_string(),
                    "Description".to_string(),
                    "product-3.png".to_string(),
                    120.0,
                )])
            });

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByCategoryParams {
                category: "Shoes".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "Shoes");
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_products_by_category()
            .returning(|_| Ok(vec![]));

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByCategoryParams {
                category: "shoes".to_string(),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }
}

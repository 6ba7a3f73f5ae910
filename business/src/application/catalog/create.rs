use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::{NewProductProps, Product};
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            id: params.id,
            name: params.name,
            category: params.category,
            summary: params.summary,
            description: params.description,
            image_file: params.image_file,
            price: params.price,
        })?;

        let stored = self
            .repository
            .create_product(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::AlreadyExists,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", stored.id));
        Ok(stored)
    }
}

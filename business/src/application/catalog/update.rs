use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::{NewProductProps, Product};
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::logger::Logger;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<bool, ProductError> {
        self.logger
            .info(&format!("Replacing product: {}", params.id));

        let product = Product::new(NewProductProps {
            id: Some(params.id),
            name: params.name,
            category: params.category,
            summary: params.summary,
            description: params.description,
            image_file: params.image_file,
            price: params.price,
        })?;

        // `false` covers both "no document matched" and "nothing was
        // modified"; it is the sole not-found signal for this operation.
        let modified = self.repository.update_product(&product).await?;

        if !modified {
            self.logger
                .warn(&format!("Replace did not modify product: {}", product.id));
        }
        Ok(modified)
    }
}

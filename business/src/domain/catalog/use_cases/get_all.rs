use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, ProductError>;
}

use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;

pub struct GetProductsByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetProductsByNameUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsByNameParams)
    -> Result<Vec<Product>, ProductError>;
}

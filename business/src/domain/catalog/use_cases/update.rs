use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;

pub struct UpdateProductParams {
    pub id: String,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<bool, ProductError>;
}

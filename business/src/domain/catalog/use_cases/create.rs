use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;
use crate::domain::catalog::model::Product;

pub struct CreateProductParams {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}

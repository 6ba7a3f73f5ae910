use async_trait::async_trait;

use crate::domain::catalog::errors::ProductError;

pub struct DeleteProductParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError>;
}

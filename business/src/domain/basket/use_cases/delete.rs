use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;

pub struct DeleteBasketParams {
    pub user_name: String,
}

#[async_trait]
pub trait DeleteBasketUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBasketParams) -> Result<(), BasketError>;
}

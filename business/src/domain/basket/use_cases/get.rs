use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::ShoppingCart;

pub struct GetBasketParams {
    pub user_name: String,
}

#[async_trait]
pub trait GetBasketUseCase: Send + Sync {
    async fn execute(&self, params: GetBasketParams)
    -> Result<Option<ShoppingCart>, BasketError>;
}

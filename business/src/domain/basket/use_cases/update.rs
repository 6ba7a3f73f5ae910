use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{CartItem, ShoppingCart};

pub struct UpdateBasketParams {
    pub user_name: String,
    pub items: Vec<CartItem>,
}

#[async_trait]
pub trait UpdateBasketUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBasketParams) -> Result<ShoppingCart, BasketError>;
}

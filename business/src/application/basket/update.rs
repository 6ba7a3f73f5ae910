use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::ShoppingCart;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};
use crate::domain::logger::Logger;

pub struct UpdateBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBasketUseCase for UpdateBasketUseCaseImpl {
    async fn execute(&self, params: UpdateBasketParams) -> Result<ShoppingCart, BasketError> {
        self.logger
            .info(&format!("Updating basket for user: {}", params.user_name));

        let cart = ShoppingCart::new(params.user_name, params.items)?;

        // Wholesale overwrite; the repository returns the value it re-read
        // from the store after writing.
        let stored = self.repository.update_basket(&cart).await?;

        self.logger.info(&format!(
            "Basket stored for user {} with {} items",
            stored.user_name,
            stored.items.len()
        ));
        Ok(stored)
    }
}

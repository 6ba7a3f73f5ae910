use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::ShoppingCart;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use crate::domain::logger::Logger;

pub struct GetBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBasketUseCase for GetBasketUseCaseImpl {
    async fn execute(
        &self,
        params: GetBasketParams,
    ) -> Result<Option<ShoppingCart>, BasketError> {
        self.logger
            .info(&format!("Fetching basket for user: {}", params.user_name));

        // Absent is an ordinary outcome here; the transport layer decides
        // what to substitute.
        let cart = self.repository.get_basket(&params.user_name).await?;

        Ok(cart)
    }
}

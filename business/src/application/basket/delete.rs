use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::delete::{DeleteBasketParams, DeleteBasketUseCase};
use crate::domain::logger::Logger;

pub struct DeleteBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBasketUseCase for DeleteBasketUseCaseImpl {
    async fn execute(&self, params: DeleteBasketParams) -> Result<(), BasketError> {
        self.logger
            .info(&format!("Deleting basket for user: {}", params.user_name));

        // Idempotent: no existence check, removing a missing key succeeds.
        self.repository.delete_basket(&params.user_name).await?;

        Ok(())
    }
}

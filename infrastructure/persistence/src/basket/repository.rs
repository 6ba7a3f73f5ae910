use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use business::domain::basket::model::ShoppingCart;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;

use crate::codec;

use super::entity::ShoppingCartEntity;

pub struct BasketRepositoryRedis {
    manager: ConnectionManager,
}

impl BasketRepositoryRedis {
    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryRedis {
    async fn get_basket(&self, user_name: &str) -> Result<Option<ShoppingCart>, RepositoryError> {
        let mut conn = self.manager.clone();

        let raw: Option<String> = conn
            .get(user_name)
            .await
            .map_err(|_| RepositoryError::Unavailable)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        // An entry holding empty text decodes to absent, same as no entry.
        let entity: Option<ShoppingCartEntity> =
            codec::decode(&raw).map_err(|_| RepositoryError::Decode)?;

        Ok(entity.map(ShoppingCartEntity::into_domain))
    }

    async fn update_basket(&self, cart: &ShoppingCart) -> Result<ShoppingCart, RepositoryError> {
        let encoded = codec::encode(&ShoppingCartEntity::from_domain(cart))
            .map_err(|_| RepositoryError::Decode)?;

        let mut conn = self.manager.clone();
        let _: () = conn
            .set(&cart.user_name, encoded)
            .await
            .map_err(|_| RepositoryError::Unavailable)?;

        // Read back after the write completes so the returned cart reflects
        // exactly what the store now holds.
        self.get_basket(&cart.user_name)
            .await?
            .ok_or(RepositoryError::Decode)
    }

    async fn delete_basket(&self, user_name: &str) -> Result<(), RepositoryError> {
        let mut conn = self.manager.clone();

        // DEL on a missing key returns 0; either way the entry is gone.
        let _: () = conn
            .del(user_name)
            .await
            .map_err(|_| RepositoryError::Unavailable)?;

        Ok(())
    }
}

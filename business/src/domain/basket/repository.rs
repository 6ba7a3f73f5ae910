use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingCart;

/// Port over the distributed key-value cache holding baskets, keyed by
/// user name. Absent entries are `Ok(None)`, never an error.
#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn get_basket(&self, user_name: &str) -> Result<Option<ShoppingCart>, RepositoryError>;
    /// Overwrites the stored cart wholesale (last-write-wins) and returns
    /// the value re-read from the store.
    async fn update_basket(&self, cart: &ShoppingCart) -> Result<ShoppingCart, RepositoryError>;
    /// Removing a non-existent key is a successful no-op.
    async fn delete_basket(&self, user_name: &str) -> Result<(), RepositoryError>;
}

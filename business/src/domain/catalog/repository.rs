use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Port over the product document collection.
///
/// Lookups signal "nothing matched" with `None` or an empty vec; the
/// boolean-returning mutations report `false` both when no document matched
/// and when the store refused the write. Callers cannot tell those apart
/// without store-level diagnostics.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
    /// Element-match on the name field: matches when any element of a
    /// possibly multi-valued name equals `name`.
    async fn get_products_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Inserts a new document; the store enforces id uniqueness. Returns the
    /// product as stored, including a store-assigned id when none was given.
    async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Full-document replace keyed by id. `true` only when the store
    /// acknowledged the write and a document was actually modified.
    async fn update_product(&self, product: &Product) -> Result<bool, RepositoryError>;
    /// `true` only when the store acknowledged the delete and a document was
    /// actually removed.
    async fn delete_product(&self, id: &str) -> Result<bool, RepositoryError>;
}

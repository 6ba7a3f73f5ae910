use mongodb::{Client as MongoClient, Collection};
use redis::aio::ConnectionManager;
use thiserror::Error;

use crate::catalog::entity::ProductDocument;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.cache_connection_error")]
    CacheConnectionError,
    #[error("database.document_store_connection_error")]
    DocumentStoreConnectionError,
}

/// Configuration for the basket cache connection
pub struct CacheConfig {
    pub connection_string: String,
}

impl CacheConfig {
    pub fn new(connection_string: String) -> Self {
        Self { connection_string }
    }
}

/// Configuration for the catalog document store
pub struct DocumentStoreConfig {
    pub connection_string: String,
    pub database_name: String,
    pub collection_name: String,
}

/// Handle to the product collection, opened once on startup and injected
/// into the catalog repository.
pub struct CatalogContext {
    pub products: Collection<ProductDocument>,
}

/// Opens the connection to the Redis cache backing the basket store.
///
/// The manager multiplexes one connection and reconnects on its own; it is
/// cheap to clone per operation.
pub async fn create_cache_manager(config: &CacheConfig) -> Result<ConnectionManager, DatabaseError> {
    let client = redis::Client::open(config.connection_string.as_str())
        .map_err(|_| DatabaseError::CacheConnectionError)?;

    ConnectionManager::new(client)
        .await
        .map_err(|_| DatabaseError::CacheConnectionError)
}

/// Connects to the document store and resolves the product collection.
pub async fn create_catalog_context(
    config: &DocumentStoreConfig,
) -> Result<CatalogContext, DatabaseError> {
    let client = MongoClient::with_uri_str(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::DocumentStoreConnectionError)?;

    let database = client.database(&config.database_name);

    Ok(CatalogContext {
        products: database.collection(&config.collection_name),
    })
}

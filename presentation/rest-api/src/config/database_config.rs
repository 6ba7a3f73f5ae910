use persistence::db::{CatalogContext, DocumentStoreConfig, create_catalog_context};
use std::env;

/// Initialize the catalog document store from environment variables
///
/// Environment variables:
/// - MONGO_URL: MongoDB connection string (required)
/// - MONGO_DATABASE: Database name (default: "CatalogDb")
/// - MONGO_COLLECTION: Product collection name (default: "Products")
///
/// # Errors
/// Returns error if MONGO_URL is not set or the connection fails
pub async fn init_document_store() -> anyhow::Result<CatalogContext> {
    let connection_string = env::var("MONGO_URL").expect("MONGO_URL must be set");
    let database_name = env::var("MONGO_DATABASE").unwrap_or_else(|_| "CatalogDb".to_string());
    let collection_name = env::var("MONGO_COLLECTION").unwrap_or_else(|_| "Products".to_string());

    let context = create_catalog_context(&DocumentStoreConfig {
        connection_string,
        database_name,
        collection_name,
    })
    .await?;

    Ok(context)
}

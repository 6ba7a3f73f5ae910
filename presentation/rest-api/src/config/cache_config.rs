use persistence::db::{CacheConfig, create_cache_manager};
use redis::aio::ConnectionManager;
use std::env;

/// Initialize the basket cache connection from environment variables
///
/// Environment variables:
/// - REDIS_URL: Redis connection string (required)
///
/// # Errors
/// Returns error if REDIS_URL is not set or the connection fails
pub async fn init_cache() -> anyhow::Result<ConnectionManager> {
    let cache_url = env::var("REDIS_URL").expect("REDIS_URL must be set");
    let manager = create_cache_manager(&CacheConfig::new(cache_url)).await?;
    Ok(manager)
}

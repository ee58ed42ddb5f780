use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use crate::services::storage::{StorageBackend, StorageError};

/// Redis-backed storage with an in-memory L1 cache
///
/// Redis holds the durable copy and entries never expire there. The L1 cache
/// is per instance and bounded by size and TTL.
pub struct RedisBackend {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    l1_cache: moka::future::Cache<String, String>,
}

impl RedisBackend {
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, StorageError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            l1_cache,
        })
    }

    pub fn l1_entry_count(&self) -> u64 {
        self.l1_cache.entry_count()
    }
}

#[async_trait]
impl StorageBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(value) = self.l1_cache.get(key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return Ok(Some(value));
        }

        let mut conn = self.redis.lock().await;
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut *conn).await?;
        drop(conn);

        match value {
            Some(json) => {
                tracing::trace!("Redis hit: {}", key);
                self.l1_cache.insert(key.to_string(), json.clone()).await;
                Ok(Some(json))
            }
            None => {
                tracing::trace!("Redis miss: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.redis.lock().await;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut *conn)
            .await?;
        drop(conn);

        self.l1_cache.insert(key.to_string(), value.to_string()).await;
        tracing::trace!("Stored: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.l1_cache.invalidate(key).await;
        let mut conn = self.redis.lock().await;
        redis::cmd("DEL").arg(key).query_async::<()>(&mut *conn).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_redis_set_get_remove() {
        let backend = RedisBackend::new("redis://127.0.0.1:6379", 100, 60)
            .await
            .expect("Failed to connect to Redis");

        let key = "fitwise_test_key";
        backend.set(key, "{\"a\":1}").await.unwrap();
        assert_eq!(backend.get(key).await.unwrap().as_deref(), Some("{\"a\":1}"));

        backend.remove(key).await.unwrap();
        assert_eq!(backend.get(key).await.unwrap(), None);
        backend.remove(key).await.unwrap();
    }
}

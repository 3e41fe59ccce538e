use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::domain::ClientId;

/// Redis-backed implementation of `ClientStore`.
///
/// ## Redis data model
///
/// One hash per client:
/// ```text
/// cv_builder:client:{client_id} -> HASH { user, isAuthenticated, currentUser, darkMode }
/// ```
/// - `HGET` / `HSET` / `HDEL` map one-to-one onto get / set / remove
/// - No TTL: like browser storage, entries live until cleared externally
#[derive(Clone)]
pub struct RedisClientStore {
    pool: Arc<Pool>,
}

impl RedisClientStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn client_key(client: &ClientId) -> String {
        format!("cv_builder:client:{client}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, ClientStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| ClientStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl ClientStore for RedisClientStore {
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, ClientStoreError> {
        let mut conn = self.get_conn().await?;

        conn.hget(Self::client_key(client), key)
            .await
            .map_err(|e| ClientStoreError::Unavailable(e.to_string()))
    }

    async fn set(
        &self,
        client: &ClientId,
        key: &str,
        value: &str,
    ) -> Result<(), ClientStoreError> {
        let mut conn = self.get_conn().await?;

        conn.hset::<_, _, _, ()>(Self::client_key(client), key, value)
            .await
            .map_err(|e| ClientStoreError::Unavailable(e.to_string()))
    }

    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), ClientStoreError> {
        let mut conn = self.get_conn().await?;

        conn.hdel::<_, _, ()>(Self::client_key(client), key)
            .await
            .map_err(|e| ClientStoreError::Unavailable(e.to_string()))
    }

    async fn ping(&self) -> Result<(), ClientStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| ClientStoreError::Unavailable(e.to_string()))
    }
}

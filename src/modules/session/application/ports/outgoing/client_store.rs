use async_trait::async_trait;

use crate::session::domain::ClientId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientStoreError {
    #[error("Client store unavailable: {0}")]
    Unavailable(String),

    #[error("Client store serialization error: {0}")]
    Serialization(String),
}

/// String key/value storage scoped to one client, the way a browser's
/// local storage is scoped to one origin. Readers must tolerate any key
/// being absent.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, ClientStoreError>;

    async fn set(&self, client: &ClientId, key: &str, value: &str)
        -> Result<(), ClientStoreError>;

    /// Removing an absent key succeeds.
    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), ClientStoreError>;

    async fn ping(&self) -> Result<(), ClientStoreError>;
}

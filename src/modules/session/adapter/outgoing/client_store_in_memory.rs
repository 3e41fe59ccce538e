use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::domain::ClientId;

/// Process-local `ClientStore`. Everything is lost on restart, which matches
/// a browser whose storage gets cleared.
#[derive(Clone, Default)]
pub struct InMemoryClientStore {
    entries: Arc<RwLock<HashMap<ClientId, HashMap<String, String>>>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, ClientStoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(client)
            .and_then(|namespace| namespace.get(key))
            .cloned())
    }

    async fn set(
        &self,
        client: &ClientId,
        key: &str,
        value: &str,
    ) -> Result<(), ClientStoreError> {
        let mut entries = self.entries.write().await;
        entries
            .entry(*client)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, client: &ClientId, key: &str) -> Result<(), ClientStoreError> {
        let mut entries = self.entries.write().await;
        if let Some(namespace) = entries.get_mut(client) {
            namespace.remove(key);
            if namespace.is_empty() {
                entries.remove(client);
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), ClientStoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryClientStore::new();
        let client = ClientId::new();

        store.set(&client, "darkMode", "true").await.unwrap();

        assert_eq!(
            store.get(&client, "darkMode").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let store = InMemoryClientStore::new();

        assert_eq!(store.get(&ClientId::new(), "user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clients_do_not_see_each_other() {
        let store = InMemoryClientStore::new();
        let alice = ClientId::new();
        let bob = ClientId::new();

        store.set(&alice, "currentUser", "alice").await.unwrap();

        assert_eq!(store.get(&bob, "currentUser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = InMemoryClientStore::new();
        let client = ClientId::new();

        store.set(&client, "isAuthenticated", "true").await.unwrap();
        store.remove(&client, "isAuthenticated").await.unwrap();
        store.remove(&client, "isAuthenticated").await.unwrap();

        assert_eq!(store.get(&client, "isAuthenticated").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = InMemoryClientStore::new();
        let client = ClientId::new();

        store.set(&client, "currentUser", "first").await.unwrap();
        store.set(&client, "currentUser", "second").await.unwrap();

        assert_eq!(
            store.get(&client, "currentUser").await.unwrap(),
            Some("second".to_string())
        );
    }
}

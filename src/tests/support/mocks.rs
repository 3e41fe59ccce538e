use async_trait::async_trait;
use mockall::mock;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::domain::ClientId;

mock! {
    pub ClientStoreMock {}

    #[async_trait]
    impl ClientStore for ClientStoreMock {
        async fn get(&self, client: &ClientId, key: &str) -> Result<Option<String>, ClientStoreError>;
        async fn set(&self, client: &ClientId, key: &str, value: &str) -> Result<(), ClientStoreError>;
        async fn remove(&self, client: &ClientId, key: &str) -> Result<(), ClientStoreError>;
        async fn ping(&self) -> Result<(), ClientStoreError>;
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::application::{SessionContext, SessionUpdate};
use crate::session::domain::ClientId;

/// Reads and flips the dark/light preference. Works for signed-out
/// clients too; the toggle lives outside the gated screens.
#[async_trait]
pub trait IDarkModeUseCase: Send + Sync {
    async fn current(&self, client: &ClientId) -> Result<bool, ClientStoreError>;

    /// Returns the new value.
    async fn toggle(&self, client: &ClientId) -> Result<bool, ClientStoreError>;
}

pub struct DarkModeUseCase {
    store: Arc<dyn ClientStore + Send + Sync>,
}

impl DarkModeUseCase {
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IDarkModeUseCase for DarkModeUseCase {
    async fn current(&self, client: &ClientId) -> Result<bool, ClientStoreError> {
        let session = SessionContext::load(self.store.as_ref(), client).await?;
        Ok(session.dark_mode)
    }

    async fn toggle(&self, client: &ClientId) -> Result<bool, ClientStoreError> {
        let dark_mode = !SessionContext::load(self.store.as_ref(), client)
            .await?
            .dark_mode;
        SessionUpdate::new()
            .dark_mode(dark_mode)
            .save(self.store.as_ref(), client)
            .await?;

        info!(client = %client, dark_mode, "Theme preference toggled");
        Ok(dark_mode)
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::outgoing::DashboardTeardown;
use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::application::SessionUpdate;
use crate::session::domain::{ClientId, Navigation, Route};

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, client: &ClientId) -> Result<Navigation, ClientStoreError>;
}

/// Clears the authenticated flag and current user. The stored credential
/// record and theme preference stay, so the same account can log in again.
pub struct LogoutUseCase {
    store: Arc<dyn ClientStore + Send + Sync>,
    teardown: Arc<dyn DashboardTeardown>,
}

impl LogoutUseCase {
    pub fn new(
        store: Arc<dyn ClientStore + Send + Sync>,
        teardown: Arc<dyn DashboardTeardown>,
    ) -> Self {
        Self { store, teardown }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, client: &ClientId) -> Result<Navigation, ClientStoreError> {
        SessionUpdate::new()
            .authenticated(false)
            .current_user(None)
            .save(self.store.as_ref(), client)
            .await?;

        self.teardown.teardown(client).await;

        info!(client = %client, "Client logged out");
        Ok(Navigation::immediate(Route::Entry))
    }
}

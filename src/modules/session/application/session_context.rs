use tracing::warn;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::domain::entities::keys;
use crate::session::domain::{ClientId, CredentialRecord};

/// Everything the app keeps in a client's store, loaded in one go. Changes
/// go back through a [`SessionUpdate`]; nothing reads the store behind its
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user: Option<CredentialRecord>,
    pub is_authenticated: bool,
    pub current_user: Option<String>,
    pub dark_mode: bool,
}

impl SessionContext {
    pub async fn load(
        store: &dyn ClientStore,
        client: &ClientId,
    ) -> Result<Self, ClientStoreError> {
        let user = match store.get(client, keys::USER).await? {
            Some(raw) => match serde_json::from_str::<CredentialRecord>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(client = %client, error = %e, "Ignoring malformed stored user record");
                    None
                }
            },
            None => None,
        };

        // Any non-empty flag counts, the same truthiness the browser gate used.
        let is_authenticated = store
            .get(client, keys::IS_AUTHENTICATED)
            .await?
            .is_some_and(|flag| !flag.is_empty());

        let current_user = store.get(client, keys::CURRENT_USER).await?;

        let dark_mode = store.get(client, keys::DARK_MODE).await?.as_deref() == Some("true");

        Ok(Self {
            user,
            is_authenticated,
            current_user,
            dark_mode,
        })
    }
}

/// The session keys one operation changes. `save` writes exactly these and
/// leaves every other key in the store alone, so operations that touch
/// different keys never overwrite each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    user: Option<CredentialRecord>,
    is_authenticated: Option<bool>,
    current_user: Option<Option<String>>,
    dark_mode: Option<bool>,
}

impl SessionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the credential record. There is no way to delete it.
    pub fn user(mut self, record: CredentialRecord) -> Self {
        self.user = Some(record);
        self
    }

    pub fn authenticated(mut self, is_authenticated: bool) -> Self {
        self.is_authenticated = Some(is_authenticated);
        self
    }

    pub fn current_user(mut self, username: Option<String>) -> Self {
        self.current_user = Some(username);
        self
    }

    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }

    pub async fn save(
        &self,
        store: &dyn ClientStore,
        client: &ClientId,
    ) -> Result<(), ClientStoreError> {
        if let Some(user) = &self.user {
            let raw = serde_json::to_string(user)
                .map_err(|e| ClientStoreError::Serialization(e.to_string()))?;
            store.set(client, keys::USER, &raw).await?;
        }

        match self.is_authenticated {
            Some(true) => store.set(client, keys::IS_AUTHENTICATED, "true").await?,
            Some(false) => store.remove(client, keys::IS_AUTHENTICATED).await?,
            None => {}
        }

        match &self.current_user {
            Some(Some(username)) => store.set(client, keys::CURRENT_USER, username).await?,
            Some(None) => store.remove(client, keys::CURRENT_USER).await?,
            None => {}
        }

        if let Some(dark_mode) = self.dark_mode {
            let value = if dark_mode { "true" } else { "false" };
            store.set(client, keys::DARK_MODE, value).await?;
        }

        Ok(())
    }
}

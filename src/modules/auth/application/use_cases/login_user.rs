use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::{LoginForm, LoginFormError};
use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::application::{SessionContext, SessionUpdate};
use crate::session::domain::navigation::{FALLBACK_REDIRECT_DELAY, REDIRECT_DELAY};
use crate::session::domain::{ClientId, Navigation, Route};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Form(#[from] LoginFormError),

    #[error("Client store error: {0}")]
    Store(#[from] ClientStoreError),
}

/// How a login got through. Demo login never rejects non-empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMatch {
    /// Username and password equal the stored record.
    StoredCredential,
    /// No stored record, or it did not match: the typed username is
    /// accepted and remembered as the current user.
    PermissiveFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: String,
    pub matched: LoginMatch,
    pub navigation: Navigation,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, client: &ClientId, form: LoginForm)
        -> Result<LoginOutcome, LoginError>;
}

pub struct LoginUserUseCase {
    store: Arc<dyn ClientStore + Send + Sync>,
}

impl LoginUserUseCase {
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(
        &self,
        client: &ClientId,
        form: LoginForm,
    ) -> Result<LoginOutcome, LoginError> {
        form.validate()?;

        let session = SessionContext::load(self.store.as_ref(), client).await?;
        let matched = match &session.user {
            Some(user) if user.matches(&form.username, &form.password) => {
                LoginMatch::StoredCredential
            }
            _ => LoginMatch::PermissiveFallback,
        };

        let update = SessionUpdate::new().authenticated(true);
        let (update, navigation) = match matched {
            LoginMatch::StoredCredential => {
                (update, Navigation::to(Route::Dashboard, REDIRECT_DELAY))
            }
            LoginMatch::PermissiveFallback => (
                update.current_user(Some(form.username.clone())),
                Navigation::to(Route::Dashboard, FALLBACK_REDIRECT_DELAY),
            ),
        };
        update.save(self.store.as_ref(), client).await?;

        match matched {
            LoginMatch::StoredCredential => {
                info!(client = %client, username = %form.username, "Login matched stored account")
            }
            LoginMatch::PermissiveFallback => {
                warn!(client = %client, username = %form.username, "Login accepted without a matching account")
            }
        }

        Ok(LoginOutcome {
            username: form.username,
            matched,
            navigation,
        })
    }
}

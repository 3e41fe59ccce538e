use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::{SignupForm, SignupFormError};
use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::application::SessionUpdate;
use crate::session::domain::navigation::REDIRECT_DELAY;
use crate::session::domain::{ClientId, Navigation, Route};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign Up Form Submitted Successfully!";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    Form(#[from] SignupFormError),

    #[error("Client store error: {0}")]
    Store(#[from] ClientStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub message: &'static str,
    pub username: String,
    pub navigation: Navigation,
}

#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, client: &ClientId, form: SignupForm)
        -> Result<SignupOutcome, SignupError>;
}

/// Stores the submitted credentials as the client's single demo account.
/// A second signup replaces the first.
pub struct SignupUserUseCase {
    store: Arc<dyn ClientStore + Send + Sync>,
}

impl SignupUserUseCase {
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ISignupUserUseCase for SignupUserUseCase {
    async fn execute(
        &self,
        client: &ClientId,
        form: SignupForm,
    ) -> Result<SignupOutcome, SignupError> {
        let record = form.validate()?;
        let username = record.username.clone();

        SessionUpdate::new()
            .user(record)
            .authenticated(true)
            .save(self.store.as_ref(), client)
            .await?;

        info!(client = %client, username = %username, "Demo account stored");

        Ok(SignupOutcome {
            message: SIGNUP_SUCCESS_MESSAGE,
            username,
            navigation: Navigation::to(Route::Dashboard, REDIRECT_DELAY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::adapter::outgoing::InMemoryClientStore;
    use crate::session::application::SessionContext;
    use crate::session::domain::entities::keys;
    use crate::tests::support::mocks::MockClientStoreMock;

    fn form() -> SignupForm {
        SignupForm {
            username: "linus".to_string(),
            email: "linus@example.org".to_string(),
            password: "kernel".to_string(),
            confirm_password: "kernel".to_string(),
            agree: true,
        }
    }

    #[tokio::test]
    async fn test_signup_stores_record_and_flag() {
        let store = Arc::new(InMemoryClientStore::new());
        let client = ClientId::new();
        let use_case = SignupUserUseCase::new(store.clone());

        let outcome = use_case.execute(&client, form()).await.unwrap();

        assert_eq!(outcome.message, "Sign Up Form Submitted Successfully!");
        assert_eq!(outcome.username, "linus");
        assert_eq!(
            outcome.navigation,
            Navigation::to(Route::Dashboard, REDIRECT_DELAY)
        );

        let session = SessionContext::load(store.as_ref(), &client).await.unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.user.unwrap().email, "linus@example.org");
        assert_eq!(session.current_user, None);
    }

    #[tokio::test]
    async fn test_second_signup_overwrites_record() {
        let store = Arc::new(InMemoryClientStore::new());
        let client = ClientId::new();
        let use_case = SignupUserUseCase::new(store.clone());

        use_case.execute(&client, form()).await.unwrap();
        use_case
            .execute(
                &client,
                SignupForm {
                    username: "tux".to_string(),
                    ..form()
                },
            )
            .await
            .unwrap();

        let raw = store.get(&client, keys::USER).await.unwrap().unwrap();
        assert!(raw.contains("\"tux\""));
        assert!(!raw.contains("\"linus\""));
    }

    #[tokio::test]
    async fn test_invalid_form_leaves_store_untouched() {
        let mut store = MockClientStoreMock::new();
        store.expect_get().never();
        store.expect_set().never();
        let use_case = SignupUserUseCase::new(Arc::new(store));

        let result = use_case
            .execute(
                &ClientId::new(),
                SignupForm {
                    agree: false,
                    ..form()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(SignupError::Form(SignupFormError::AgreementRequired))
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut store = MockClientStoreMock::new();
        store
            .expect_set()
            .returning(|_, _, _| Err(ClientStoreError::Unavailable("refused".to_string())));
        let use_case = SignupUserUseCase::new(Arc::new(store));

        let result = use_case.execute(&ClientId::new(), form()).await;

        assert!(matches!(result, Err(SignupError::Store(_))));
    }

    #[tokio::test]
    async fn test_signup_writes_only_account_keys() {
        let mut store = MockClientStoreMock::new();
        store.expect_get().never();
        store
            .expect_set()
            .withf(|_, key, _| key == keys::USER || key == keys::IS_AUTHENTICATED)
            .times(2)
            .returning(|_, _, _| Ok(()));
        let use_case = SignupUserUseCase::new(Arc::new(store));

        assert!(use_case.execute(&ClientId::new(), form()).await.is_ok());
    }
}

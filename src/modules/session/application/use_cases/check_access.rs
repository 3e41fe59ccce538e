use async_trait::async_trait;
use std::sync::Arc;

use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::application::{AccessGate, GateDecision, SessionContext};
use crate::session::domain::{ClientId, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCheck {
    pub decision: GateDecision,
    pub session: SessionContext,
}

#[async_trait]
pub trait ICheckAccessUseCase: Send + Sync {
    async fn execute(&self, client: &ClientId, route: Route)
        -> Result<AccessCheck, ClientStoreError>;
}

pub struct CheckAccessUseCase {
    store: Arc<dyn ClientStore + Send + Sync>,
}

impl CheckAccessUseCase {
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ICheckAccessUseCase for CheckAccessUseCase {
    async fn execute(
        &self,
        client: &ClientId,
        route: Route,
    ) -> Result<AccessCheck, ClientStoreError> {
        let session = SessionContext::load(self.store.as_ref(), client).await?;
        let decision = AccessGate::check(&session, route);

        Ok(AccessCheck { decision, session })
    }
}

use actix_web::web;
use std::sync::Arc;

use crate::cv::adapter::outgoing::DataUrlEncoder;
use crate::cv::application::ports::outgoing::{CvExporter, PictureEncoder};
use crate::session::adapter::outgoing::InMemoryClientStore;
use crate::session::application::ports::outgoing::ClientStore;
use crate::tests::support::stubs::RecordingCvExporter;
use crate::AppState;

/// Wires a real `AppState` over an in-memory store. Swap a collaborator to
/// exercise failure paths.
pub struct TestAppStateBuilder {
    store: Arc<InMemoryClientStore>,
    client_store: Option<Arc<dyn ClientStore + Send + Sync>>,
    picture_encoder: Arc<dyn PictureEncoder>,
    cv_exporter: Arc<dyn CvExporter>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryClientStore::new()),
            client_store: None,
            picture_encoder: Arc::new(DataUrlEncoder),
            cv_exporter: Arc::new(RecordingCvExporter::default()),
        }
    }
}

impl TestAppStateBuilder {
    /// The in-memory store the built state uses, unless replaced.
    pub fn store(&self) -> Arc<InMemoryClientStore> {
        Arc::clone(&self.store)
    }

    pub fn with_client_store(mut self, store: impl ClientStore + 'static) -> Self {
        self.client_store = Some(Arc::new(store));
        self
    }

    pub fn with_cv_exporter(mut self, exporter: Arc<dyn CvExporter>) -> Self {
        self.cv_exporter = exporter;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let client_store = self
            .client_store
            .unwrap_or_else(|| self.store.clone() as Arc<dyn ClientStore + Send + Sync>);

        web::Data::new(AppState::new(
            client_store,
            self.picture_encoder,
            self.cv_exporter,
        ))
    }
}

use async_trait::async_trait;
use std::sync::Mutex;

use crate::cv::application::ports::outgoing::{CvExportError, CvExporter};
use crate::cv::domain::CvAggregate;
use crate::session::application::ports::outgoing::{ClientStore, ClientStoreError};
use crate::session::domain::ClientId;

/// A client store whose backend is down.
pub struct UnavailableClientStore;

fn unavailable<T>() -> Result<T, ClientStoreError> {
    Err(ClientStoreError::Unavailable(
        "connection refused".to_string(),
    ))
}

#[async_trait]
impl ClientStore for UnavailableClientStore {
    async fn get(&self, _client: &ClientId, _key: &str) -> Result<Option<String>, ClientStoreError> {
        unavailable()
    }

    async fn set(
        &self,
        _client: &ClientId,
        _key: &str,
        _value: &str,
    ) -> Result<(), ClientStoreError> {
        unavailable()
    }

    async fn remove(&self, _client: &ClientId, _key: &str) -> Result<(), ClientStoreError> {
        unavailable()
    }

    async fn ping(&self) -> Result<(), ClientStoreError> {
        unavailable()
    }
}

#[derive(Default)]
pub struct RecordingCvExporter {
    exported: Mutex<Vec<CvAggregate>>,
}

impl RecordingCvExporter {
    pub fn exported(&self) -> Vec<CvAggregate> {
        self.exported.lock().unwrap().clone()
    }
}

#[async_trait]
impl CvExporter for RecordingCvExporter {
    async fn export(&self, cv: &CvAggregate) -> Result<(), CvExportError> {
        self.exported.lock().unwrap().push(cv.clone());
        Ok(())
    }
}

pub struct FailingCvExporter;

#[async_trait]
impl CvExporter for FailingCvExporter {
    async fn export(&self, _cv: &CvAggregate) -> Result<(), CvExportError> {
        Err(CvExportError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        )))
    }
}

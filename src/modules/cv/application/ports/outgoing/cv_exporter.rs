use async_trait::async_trait;

use crate::cv::domain::CvAggregate;

#[derive(Debug, thiserror::Error)]
pub enum CvExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where a submitted CV goes.
#[async_trait]
pub trait CvExporter: Send + Sync {
    async fn export(&self, cv: &CvAggregate) -> Result<(), CvExportError>;
}

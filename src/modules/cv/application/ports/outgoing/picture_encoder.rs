use async_trait::async_trait;

use crate::shared::forms::FileBlob;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PictureEncodeError {
    #[error("Picture encoding task failed: {0}")]
    Task(String),
}

/// Turns a selected image into the data URL stored on the profile.
#[async_trait]
pub trait PictureEncoder: Send + Sync {
    async fn encode(&self, blob: FileBlob) -> Result<String, PictureEncodeError>;
}

use async_trait::async_trait;
use tracing::info;

use crate::cv::application::ports::outgoing::{CvExportError, CvExporter};
use crate::cv::domain::CvAggregate;

/// Writes the generated CV to the log, the server-side stand-in for the
/// browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCvExporter;

#[async_trait]
impl CvExporter for LogCvExporter {
    async fn export(&self, cv: &CvAggregate) -> Result<(), CvExportError> {
        let body = serde_json::to_string(cv)?;
        info!(
            full_name = %cv.profile.full_name,
            generated_at = %cv.generated_at,
            cv = %body,
            "Generated CV"
        );
        Ok(())
    }
}

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::cv::application::ports::outgoing::{CvExportError, CvExporter};
use crate::cv::domain::CvAggregate;

/// Writes each generated CV as a pretty-printed JSON file.
///
/// File names look like `cv-20240501T120000123Z-ada-lovelace.json`. Existing
/// files are never replaced; a clash gets a `-2`, `-3`, ... suffix instead.
#[derive(Debug, Clone)]
pub struct JsonFileCvExporter {
    dir: PathBuf,
}

impl JsonFileCvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_stem(cv: &CvAggregate) -> String {
        format!(
            "cv-{}-{}",
            cv.generated_at.format("%Y%m%dT%H%M%S%3fZ"),
            slugify(&cv.profile.full_name)
        )
    }

    async fn create_unique(&self, stem: &str) -> std::io::Result<(PathBuf, File)> {
        let mut attempt = 1u32;
        loop {
            let name = if attempt == 1 {
                format!("{stem}.json")
            } else {
                format!("{stem}-{attempt}.json")
            };
            let path = self.dir.join(name);

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists && attempt < MAX_NAME_ATTEMPTS => {
                    debug!(path = %path.display(), "CV file exists, trying next name");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

const MAX_NAME_ATTEMPTS: u32 = 1000;

fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "cv".to_string()
    } else {
        slug
    }
}

#[async_trait]
impl CvExporter for JsonFileCvExporter {
    async fn export(&self, cv: &CvAggregate) -> Result<(), CvExportError> {
        let body = serde_json::to_vec_pretty(cv)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let (path, mut file) = self.create_unique(&Self::file_stem(cv)).await?;
        file.write_all(&body).await?;
        file.flush().await?;

        info!(path = %path.display(), "CV written");
        Ok(())
    }
}

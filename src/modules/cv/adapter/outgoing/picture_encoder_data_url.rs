use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::cv::application::ports::outgoing::{PictureEncodeError, PictureEncoder};
use crate::shared::forms::FileBlob;

/// Encodes pictures as `data:<mime>;base64,<payload>` on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

#[async_trait]
impl PictureEncoder for DataUrlEncoder {
    async fn encode(&self, blob: FileBlob) -> Result<String, PictureEncodeError> {
        tokio::task::spawn_blocking(move || {
            format!(
                "data:{};base64,{}",
                blob.mime_type,
                STANDARD.encode(&blob.bytes)
            )
        })
        .await
        .map_err(|e| PictureEncodeError::Task(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encodes_data_url() {
        let blob = FileBlob::new(Some("dot.gif".to_string()), "image/gif", b"GIF89a".to_vec());

        let url = DataUrlEncoder.encode(blob).await.unwrap();

        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[tokio::test]
    async fn test_empty_file_gives_empty_payload() {
        let blob = FileBlob::new(None, "image/png", Vec::new());

        assert_eq!(
            DataUrlEncoder.encode(blob).await.unwrap(),
            "data:image/png;base64,"
        );
    }
}

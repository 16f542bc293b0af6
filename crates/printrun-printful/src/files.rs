//! Design file ingestion (`POST /files`).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use printrun_core::RemoteFileHandle;

use crate::client::PrintfulClient;
use crate::error::PrintfulError;
use crate::types::{FileRecord, FileUploadRequest};

const FILE_TYPE_DEFAULT: &str = "default";

/// Encodes raw bytes as a base64 `data:` URL.
#[must_use]
pub fn data_url(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

impl PrintfulClient {
    /// Uploads a design image to the Printful file library.
    ///
    /// The bytes are sent inline as a base64 data URL with file type
    /// `"default"`. The returned handle is attached to every variant of every
    /// listing made from this design.
    ///
    /// # Errors
    ///
    /// - [`PrintfulError::Api`] if the envelope reports a failure.
    /// - [`PrintfulError::Http`] on network failure.
    /// - [`PrintfulError::Deserialize`] if the response shape is unexpected.
    pub async fn ingest_asset(
        &self,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<RemoteFileHandle, PrintfulError> {
        let url = data_url(bytes, mime_type);
        let record: FileRecord = self
            .post_json(
                "files",
                &FileUploadRequest {
                    kind: FILE_TYPE_DEFAULT,
                    url: &url,
                },
            )
            .await?;

        let preview_url = record.best_preview_url().unwrap_or_default().to_string();
        if preview_url.is_empty() {
            tracing::warn!(
                file_id = record.id,
                status = record.status.as_deref().unwrap_or("unknown"),
                "ingested file has no preview URL yet"
            );
        }

        Ok(RemoteFileHandle {
            remote_file_id: record.id,
            preview_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_encodes_bytes() {
        assert_eq!(data_url(b"hello", "image/png"), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn data_url_of_empty_bytes() {
        assert_eq!(data_url(&[], "image/svg+xml"), "data:image/svg+xml;base64,");
    }
}

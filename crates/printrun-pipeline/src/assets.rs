//! Local design storage as seen by the pipeline: an existence check and a
//! byte read. Uploading, listing, and deleting files live elsewhere.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::AssetError;

/// Raw design bytes plus the MIME type used for the remote data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAsset {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

pub trait AssetStore: Send + Sync {
    /// Returns `true` if `asset_id` refers to a readable stored file.
    fn exists(&self, asset_id: &str) -> impl Future<Output = bool> + Send;

    /// Reads the stored file.
    fn load(&self, asset_id: &str) -> impl Future<Output = Result<LocalAsset, AssetError>> + Send;
}

/// Asset store backed by a flat uploads directory; asset ids are file names.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps an asset id to a path under the root. Only a single plain file
    /// name is accepted, so ids cannot escape the uploads directory.
    fn resolve(&self, asset_id: &str) -> Result<PathBuf, AssetError> {
        let invalid = || AssetError::InvalidId {
            asset_id: asset_id.to_owned(),
        };
        if asset_id.trim().is_empty() || asset_id.contains(['/', '\\']) {
            return Err(invalid());
        }
        let mut components = Path::new(asset_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.root.join(name)),
            _ => Err(invalid()),
        }
    }
}

impl AssetStore for FsAssetStore {
    async fn exists(&self, asset_id: &str) -> bool {
        let Ok(path) = self.resolve(asset_id) else {
            return false;
        };
        tokio::fs::metadata(&path)
            .await
            .is_ok_and(|meta| meta.is_file())
    }

    async fn load(&self, asset_id: &str) -> Result<LocalAsset, AssetError> {
        let path = self.resolve(asset_id)?;
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AssetError::NotFound {
                    asset_id: asset_id.to_owned(),
                }
            } else {
                AssetError::Io {
                    asset_id: asset_id.to_owned(),
                    source: e,
                }
            }
        })?;
        Ok(LocalAsset {
            bytes,
            mime_type: guess_mime_type(asset_id).to_string(),
        })
    }
}

/// MIME type hint from the file extension; PNG when unknown.
#[must_use]
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

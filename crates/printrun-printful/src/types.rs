//! Printful API request and response types.
//!
//! Every response is wrapped in a `{"code": 200, "result": ...}` envelope.
//! On failure `code` carries the error status and `result` (or
//! `error.message`) carries the human-readable reason.

use printrun_core::SyncVariant;
use serde::{Deserialize, Serialize};

/// Status code the envelope carries on success.
pub const SUCCESS_CODE: i64 = 200;

/// Top-level envelope for Printful responses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<i64>,
    pub result: T,
}

/// Error detail some endpoints include next to `result`.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /files
// ---------------------------------------------------------------------------

/// Body for registering a design file in the Printful file library.
#[derive(Debug, Serialize)]
pub struct FileUploadRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    /// Either a public URL or a `data:` URL with base64 content.
    pub url: &'a str,
}

/// File record returned by `POST /files`.
#[derive(Debug, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl FileRecord {
    /// Best available image URL; Printful may not have rendered a preview yet.
    #[must_use]
    pub fn best_preview_url(&self) -> Option<&str> {
        self.preview_url
            .as_deref()
            .or(self.thumbnail_url.as_deref())
            .or(self.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

// ---------------------------------------------------------------------------
// POST /store/products
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SyncProductSpec<'a> {
    pub name: &'a str,
    pub thumbnail: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateProductRequest<'a> {
    pub sync_product: SyncProductSpec<'a>,
    pub sync_variants: &'a [SyncVariant],
}

/// Store product returned by `POST /store/products`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteProductRecord {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Number of variants Printful attached to the product.
    #[serde(default)]
    pub variants: Option<i64>,
    #[serde(default)]
    pub synced: Option<i64>,
}

use thiserror::Error;

/// Request-level failure of a bulk run. Everything else is reported inside
/// the batch report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("no designs provided")]
    NoDesigns,
}

/// Errors from the local asset store.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {asset_id}")]
    NotFound { asset_id: String },

    #[error("invalid asset id \"{asset_id}\"")]
    InvalidId { asset_id: String },

    #[error("failed to read asset {asset_id}: {source}")]
    Io {
        asset_id: String,
        #[source]
        source: std::io::Error,
    },
}

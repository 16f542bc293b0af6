//! Bulk product generation: reads designs from local storage, ingests each
//! one into the remote catalog once, and publishes a listing per requested
//! garment template with a throttle between remote attempts.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod orchestrator;
pub mod throttle;

pub use assets::{guess_mime_type, AssetStore, FsAssetStore, LocalAsset};
pub use catalog::RemoteCatalog;
pub use error::{AssetError, BatchError};
pub use orchestrator::BulkOrchestrator;
pub use throttle::{FixedIntervalThrottle, Throttle};

pub mod app_config;
pub mod batch;
pub mod config;
pub mod error;
pub mod expand;
pub mod templates;

pub use app_config::{AppConfig, Environment};
pub use batch::{
    BatchItemError, BatchItemResult, BatchReport, BatchSummary, DesignAsset, ItemStatus,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use expand::{expand, price_for_position, RemoteFileHandle, SyncVariant, SyncVariantFile};
pub use templates::{load_bundled_registry, load_registry, ColorGroup, Template, TemplateRegistry};

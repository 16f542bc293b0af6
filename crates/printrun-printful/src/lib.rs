//! Client for the Printful remote catalog: design file ingestion and store
//! product creation.

pub mod client;
pub mod error;
mod files;
mod products;
pub mod types;

pub use client::PrintfulClient;
pub use files::data_url;
pub use error::PrintfulError;
pub use types::RemoteProductRecord;

//! The remote catalog seam used by the orchestrator.

use std::future::Future;

use printrun_core::{RemoteFileHandle, SyncVariant};
use printrun_printful::{PrintfulClient, PrintfulError, RemoteProductRecord};

/// The two remote operations a bulk run needs. Each is a single round trip.
pub trait RemoteCatalog: Send + Sync {
    fn ingest_asset(
        &self,
        bytes: &[u8],
        mime_type: &str,
    ) -> impl Future<Output = Result<RemoteFileHandle, PrintfulError>> + Send;

    fn create_product(
        &self,
        title: &str,
        thumbnail_url: &str,
        variants: &[SyncVariant],
    ) -> impl Future<Output = Result<RemoteProductRecord, PrintfulError>> + Send;
}

impl RemoteCatalog for PrintfulClient {
    fn ingest_asset(
        &self,
        bytes: &[u8],
        mime_type: &str,
    ) -> impl Future<Output = Result<RemoteFileHandle, PrintfulError>> + Send {
        PrintfulClient::ingest_asset(self, bytes, mime_type)
    }

    fn create_product(
        &self,
        title: &str,
        thumbnail_url: &str,
        variants: &[SyncVariant],
    ) -> impl Future<Output = Result<RemoteProductRecord, PrintfulError>> + Send {
        PrintfulClient::create_product(self, title, thumbnail_url, variants)
    }
}

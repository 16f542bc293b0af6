//! Store product creation (`POST /store/products`).

use printrun_core::SyncVariant;

use crate::client::PrintfulClient;
use crate::error::PrintfulError;
use crate::types::{CreateProductRequest, RemoteProductRecord, SyncProductSpec};

impl PrintfulClient {
    /// Creates a store product named `title` with the given variants, in order.
    ///
    /// # Errors
    ///
    /// - [`PrintfulError::Api`] if the envelope reports a failure.
    /// - [`PrintfulError::Http`] on network failure.
    /// - [`PrintfulError::Deserialize`] if the response shape is unexpected.
    pub async fn create_product(
        &self,
        title: &str,
        thumbnail_url: &str,
        variants: &[SyncVariant],
    ) -> Result<RemoteProductRecord, PrintfulError> {
        self.post_json(
            "store/products",
            &CreateProductRequest {
                sync_product: SyncProductSpec {
                    name: title,
                    thumbnail: thumbnail_url,
                },
                sync_variants: variants,
            },
        )
        .await
    }
}

//! Bulk run orchestration.
//!
//! Designs are processed one at a time, and each design's product types one
//! at a time. Per design: existence check, one asset ingestion, then one
//! product creation per requested type. Every failure is recorded in the
//! [`BatchReport`] and the run moves on.

use std::sync::Arc;

use printrun_core::{
    expand, BatchItemError, BatchItemResult, BatchReport, DesignAsset, ItemStatus,
    RemoteFileHandle, TemplateRegistry,
};

use crate::assets::AssetStore;
use crate::catalog::RemoteCatalog;
use crate::error::BatchError;
use crate::throttle::Throttle;

pub(crate) const FILE_NOT_FOUND: &str = "File not found";

/// Outcome of the per-design ingestion step.
enum IngestOutcome {
    Ingested(RemoteFileHandle),
    Failed(BatchItemError),
}

/// Outcome of one (design, product type) step.
enum ItemOutcome {
    Created(BatchItemResult),
    Failed(BatchItemError),
    /// The type key is not in the registry. Not an error.
    Skipped,
}

/// Drives a bulk run against a remote catalog.
pub struct BulkOrchestrator<C, S, T> {
    catalog: C,
    assets: S,
    registry: Arc<TemplateRegistry>,
    throttle: T,
}

impl<C, S, T> BulkOrchestrator<C, S, T>
where
    C: RemoteCatalog,
    S: AssetStore,
    T: Throttle,
{
    pub fn new(catalog: C, assets: S, registry: Arc<TemplateRegistry>, throttle: T) -> Self {
        Self {
            catalog,
            assets,
            registry,
            throttle,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Publishes every design on every requested product type.
    ///
    /// An empty `requested_types` means every type in the registry, in
    /// registry order. Unknown type keys are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::NoDesigns`] if `designs` is empty. All other
    /// failures are reported in the returned [`BatchReport`].
    pub async fn run_batch(
        &self,
        designs: &[DesignAsset],
        requested_types: &[String],
    ) -> Result<BatchReport, BatchError> {
        if designs.is_empty() {
            return Err(BatchError::NoDesigns);
        }

        let types: Vec<String> = if requested_types.is_empty() {
            self.registry.keys().map(str::to_owned).collect()
        } else {
            requested_types.to_vec()
        };

        tracing::info!(
            designs = designs.len(),
            product_types = ?types,
            "starting bulk run"
        );

        let mut report = BatchReport::default();
        for design in designs {
            self.process_design(design, &types, &mut report).await;
        }

        tracing::info!(
            created = report.created_count(),
            failed = report.failed_count(),
            "bulk run finished"
        );
        Ok(report)
    }

    async fn process_design(&self, design: &DesignAsset, types: &[String], report: &mut BatchReport) {
        if !self.assets.exists(&design.asset_id).await {
            tracing::warn!(
                design = %design.design_name,
                asset_id = %design.asset_id,
                "design file missing from local storage"
            );
            report.record_error(BatchItemError {
                design_name: design.design_name.clone(),
                garment_type: None,
                message: FILE_NOT_FOUND.to_string(),
            });
            return;
        }

        let file = match self.ingest(design).await {
            IngestOutcome::Ingested(file) => file,
            IngestOutcome::Failed(error) => {
                report.record_error(error);
                return;
            }
        };

        for type_key in types {
            match self.process_type(design, type_key, &file).await {
                ItemOutcome::Created(result) => {
                    report.record_created(result);
                    self.throttle.pause().await;
                }
                ItemOutcome::Failed(error) => {
                    report.record_error(error);
                    self.throttle.pause().await;
                }
                ItemOutcome::Skipped => {}
            }
        }
    }

    async fn ingest(&self, design: &DesignAsset) -> IngestOutcome {
        let failed = |message: String| {
            IngestOutcome::Failed(BatchItemError {
                design_name: design.design_name.clone(),
                garment_type: None,
                message,
            })
        };

        let asset = match self.assets.load(&design.asset_id).await {
            Ok(asset) => asset,
            Err(e) => {
                tracing::warn!(
                    design = %design.design_name,
                    error = %e,
                    "failed to read design file"
                );
                return failed(format!("Failed to read design file: {e}"));
            }
        };

        match self
            .catalog
            .ingest_asset(&asset.bytes, &asset.mime_type)
            .await
        {
            Ok(file) => {
                tracing::debug!(
                    design = %design.design_name,
                    file_id = file.remote_file_id,
                    "design ingested"
                );
                IngestOutcome::Ingested(file)
            }
            Err(e) => {
                tracing::warn!(
                    design = %design.design_name,
                    transport = e.is_transport(),
                    error = %e,
                    "design upload failed"
                );
                failed(format!("Failed to upload design: {e}"))
            }
        }
    }

    async fn process_type(
        &self,
        design: &DesignAsset,
        type_key: &str,
        file: &RemoteFileHandle,
    ) -> ItemOutcome {
        let Some(template) = self.registry.lookup(type_key) else {
            tracing::debug!(
                design = %design.design_name,
                product_type = %type_key,
                "skipping unknown product type"
            );
            return ItemOutcome::Skipped;
        };

        let variants = expand(template, file);
        let title = template.listing_title(&design.design_name);

        match self
            .catalog
            .create_product(&title, &file.preview_url, &variants)
            .await
        {
            Ok(record) => {
                tracing::info!(
                    design = %design.design_name,
                    product_type = %type_key,
                    product_id = record.id,
                    variants = variants.len(),
                    "product created"
                );
                ItemOutcome::Created(BatchItemResult {
                    design_name: design.design_name.clone(),
                    garment_type: type_key.to_owned(),
                    remote_product_id: record.id,
                    status: ItemStatus::Created,
                })
            }
            Err(e) => {
                tracing::warn!(
                    design = %design.design_name,
                    product_type = %type_key,
                    transport = e.is_transport(),
                    error = %e,
                    "product creation failed"
                );
                ItemOutcome::Failed(BatchItemError {
                    design_name: design.design_name.clone(),
                    garment_type: Some(type_key.to_owned()),
                    message: format!("Failed to create product: {e}"),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

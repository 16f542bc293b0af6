use serde::{Deserialize, Serialize};

/// A design ready to be published. `asset_id` refers to a file held by the
/// local asset store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignAsset {
    pub asset_id: String,
    pub design_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Created,
}

/// A listing created on the remote catalog for one (design, product type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
    pub design_name: String,
    pub garment_type: String,
    pub remote_product_id: i64,
    pub status: ItemStatus,
}

/// A failure recorded for a design, or for one of its product types when
/// `garment_type` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemError {
    pub design_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub garment_type: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub created: usize,
    pub failed: usize,
}

/// Aggregated outcome of one bulk run. Partial failure is reported here,
/// never as a failed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<BatchItemResult>,
    pub errors: Vec<BatchItemError>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn record_created(&mut self, result: BatchItemResult) {
        self.results.push(result);
        self.summary.created = self.results.len();
    }

    pub fn record_error(&mut self, error: BatchItemError) {
        self.errors.push(error);
        self.summary.failed = self.errors.len();
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.summary.created
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.summary.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tracks_recorded_items() {
        let mut report = BatchReport::default();
        report.record_created(BatchItemResult {
            design_name: "Sunset".to_string(),
            garment_type: "tshirt".to_string(),
            remote_product_id: 1,
            status: ItemStatus::Created,
        });
        report.record_error(BatchItemError {
            design_name: "Sunset".to_string(),
            garment_type: Some("hoodie".to_string()),
            message: "boom".to_string(),
        });
        report.record_error(BatchItemError {
            design_name: "Moon".to_string(),
            garment_type: None,
            message: "File not found".to_string(),
        });
        assert_eq!(report.created_count(), 1);
        assert_eq!(report.failed_count(), 2);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut report = BatchReport::default();
        report.record_created(BatchItemResult {
            design_name: "Sunset".to_string(),
            garment_type: "tshirt".to_string(),
            remote_product_id: 42,
            status: ItemStatus::Created,
        });
        report.record_error(BatchItemError {
            design_name: "Moon".to_string(),
            garment_type: None,
            message: "File not found".to_string(),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["designName"], "Sunset");
        assert_eq!(json["results"][0]["garmentType"], "tshirt");
        assert_eq!(json["results"][0]["remoteProductId"], 42);
        assert_eq!(json["results"][0]["status"], "created");
        assert!(json["errors"][0].get("garmentType").is_none());
        assert_eq!(json["errors"][0]["message"], "File not found");
        assert_eq!(json["summary"]["created"], 1);
        assert_eq!(json["summary"]["failed"], 1);
    }
}

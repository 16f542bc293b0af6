use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use printrun_core::{BatchReport, DesignAsset};
use printrun_pipeline::BatchError;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BulkCreateRequest {
    #[serde(default)]
    designs: Vec<DesignInput>,
    /// Absent or empty means every registered product type.
    #[serde(default)]
    product_types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DesignInput {
    file_id: String,
    design_name: String,
}

impl From<DesignInput> for DesignAsset {
    fn from(input: DesignInput) -> Self {
        Self {
            asset_id: input.file_id,
            design_name: input.design_name,
        }
    }
}

#[derive(Debug, Serialize)]
struct BulkCreateResponse {
    ok: bool,
    #[serde(flatten)]
    report: BatchReport,
}

#[derive(Debug, Serialize)]
struct BulkCreateFailure {
    ok: bool,
    error: String,
}

fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(BulkCreateFailure {
            ok: false,
            error: error.into(),
        }),
    )
        .into_response()
}

pub(super) async fn bulk_create(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<BulkCreateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(
                request_id = %req_id.0,
                error = %rejection.body_text(),
                "rejected bulk-create body"
            );
            return failure(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if request.designs.is_empty() {
        return failure(StatusCode::BAD_REQUEST, BatchError::NoDesigns.to_string());
    }

    let Some(runner) = state.bulk.as_ref() else {
        tracing::warn!(request_id = %req_id.0, "bulk-create called without a remote credential");
        return failure(
            StatusCode::SERVICE_UNAVAILABLE,
            "PRINTFUL_API_TOKEN is not configured",
        );
    };

    let designs: Vec<DesignAsset> = request.designs.into_iter().map(DesignAsset::from).collect();
    let product_types = request.product_types.unwrap_or_default();

    tracing::info!(
        request_id = %req_id.0,
        designs = designs.len(),
        "bulk-create accepted"
    );

    match runner.run_batch(&designs, &product_types).await {
        Ok(report) => (
            StatusCode::OK,
            Json(BulkCreateResponse { ok: true, report }),
        )
            .into_response(),
        Err(e) => failure(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

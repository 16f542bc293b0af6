use axum::{extract::State, Extension, Json};
use printrun_core::Template;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub(super) struct ProductTypeItem {
    key: String,
    name_suffix: String,
    remote_product_id: i64,
    base_price: Decimal,
    tier2_price: Option<Decimal>,
    tier3_price: Option<Decimal>,
    colors: Vec<String>,
    variant_count: usize,
}

impl From<&Template> for ProductTypeItem {
    fn from(template: &Template) -> Self {
        Self {
            key: template.key.clone(),
            name_suffix: template.name_suffix.clone(),
            remote_product_id: template.remote_product_id,
            base_price: template.base_price,
            tier2_price: template.tier2_price,
            tier3_price: template.tier3_price,
            colors: template
                .color_groups
                .iter()
                .map(|g| g.color_name.clone())
                .collect(),
            variant_count: template.variant_count(),
        }
    }
}

pub(super) async fn list_product_types(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<ProductTypeItem>>> {
    let data = state.registry.iter().map(ProductTypeItem::from).collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

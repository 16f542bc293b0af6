mod bulk;
mod product_types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use printrun_core::{AppConfig, TemplateRegistry};
use printrun_pipeline::{BulkOrchestrator, FixedIntervalThrottle, FsAssetStore};
use printrun_printful::PrintfulClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, require_bearer_auth, AuthState, RequestId};

/// Orchestrator wired to the live remote catalog, the uploads directory and
/// a fixed pause between attempts.
pub type BulkRunner = BulkOrchestrator<PrintfulClient, FsAssetStore, FixedIntervalThrottle>;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TemplateRegistry>,
    /// `None` when no remote credential is configured.
    pub bulk: Option<Arc<BulkRunner>>,
}

impl AppState {
    /// Builds shared state. A missing credential is not a startup failure;
    /// bulk creation answers 503 until one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote client cannot be constructed.
    pub fn from_config(config: &AppConfig, registry: Arc<TemplateRegistry>) -> anyhow::Result<Self> {
        let bulk = match config.printful_api_token.as_deref() {
            Some(token) if config.has_printful_token() => {
                let client = PrintfulClient::with_base_url(
                    token,
                    config.request_timeout_secs,
                    &config.printful_base_url,
                )?;
                Some(Arc::new(BulkOrchestrator::new(
                    client,
                    FsAssetStore::new(config.uploads_dir.clone()),
                    Arc::clone(&registry),
                    FixedIntervalThrottle::new(config.throttle_interval()),
                )))
            }
            _ => {
                tracing::warn!("PRINTFUL_API_TOKEN not set; bulk creation disabled");
                None
            }
        };

        Ok(Self { registry, bulk })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    printful_token: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

fn protected_router(auth: AuthState) -> Router<AppState> {
    Router::new()
        .route("/api/product-types", get(product_types::list_product_types))
        .route("/api/bulk-create", post(bulk::bulk_create))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            require_bearer_auth,
        ))
}

pub fn build_app(state: AppState, auth: AuthState) -> Router {
    let public_routes = Router::new().route("/api/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    let printful_token = if state.bulk.is_some() {
        "configured"
    } else {
        "missing"
    };

    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            printful_token,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

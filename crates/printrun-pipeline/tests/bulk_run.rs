//! End-to-end bulk runs against a wiremock Printful server.
//!
//! Uses the real `PrintfulClient` and `FsAssetStore` so the request contract,
//! envelope handling, and failure isolation are exercised together.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use printrun_core::{load_bundled_registry, DesignAsset};
use printrun_pipeline::{BulkOrchestrator, FsAssetStore, Throttle};
use printrun_printful::PrintfulClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

#[derive(Default)]
struct CountingThrottle {
    pauses: AtomicUsize,
}

impl Throttle for CountingThrottle {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

fn uploads_dir(files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "printrun-bulk-{}-{}",
        std::process::id(),
        DIR_SEQ.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).expect("create uploads dir");
    for (name, bytes) in files {
        std::fs::write(dir.join(name), bytes).expect("write upload");
    }
    dir
}

fn design(asset_id: &str, name: &str) -> DesignAsset {
    DesignAsset {
        asset_id: asset_id.to_string(),
        design_name: name.to_string(),
    }
}

fn orchestrator(
    base_url: &str,
    dir: &Path,
) -> BulkOrchestrator<PrintfulClient, FsAssetStore, CountingThrottle> {
    let client = PrintfulClient::with_base_url("test-token", 5, base_url)
        .expect("client construction should not fail");
    BulkOrchestrator::new(
        client,
        FsAssetStore::new(dir),
        Arc::new(load_bundled_registry().expect("bundled registry")),
        CountingThrottle::default(),
    )
}

async fn mount_file_upload(server: &MockServer, file_id: i64) {
    Mock::given(method("POST"))
        .and(path("/files"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "result": {
                "id": file_id,
                "preview_url": format!("https://cdn.example.com/{file_id}.png")
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn two_designs_three_types_with_one_missing_asset() {
    let server = MockServer::start().await;
    mount_file_upload(&server, 77).await;

    Mock::given(method("POST"))
        .and(path("/store/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "result": {"id": 9001, "name": "listing"}
        })))
        .expect(3)
        .mount(&server)
        .await;

    let dir = uploads_dir(&[("b.png", "design-b")]);
    let o = orchestrator(&server.uri(), &dir);
    let types = vec![
        "tshirt".to_string(),
        "hoodie".to_string(),
        "sweatshirt".to_string(),
    ];

    let report = o
        .run_batch(&[design("a.png", "A"), design("b.png", "B")], &types)
        .await
        .expect("batch runs");

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].design_name, "A");
    assert_eq!(report.errors[0].message, "File not found");
    assert_eq!(report.results.len(), 3);
    assert!(report.results.iter().all(|r| r.design_name == "B"));
    assert!(report.results.iter().all(|r| r.remote_product_id == 9001));

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn product_payload_uses_tiered_prices_and_shared_file() {
    let server = MockServer::start().await;
    mount_file_upload(&server, 55).await;

    Mock::given(method("POST"))
        .and(path("/store/products"))
        .and(body_partial_json(json!({
            "sync_product": {
                "name": "Wave Unisex Staple T-Shirt",
                "thumbnail": "https://cdn.example.com/55.png"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "result": {"id": 12}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = uploads_dir(&[("wave.png", "wave")]);
    let o = orchestrator(&server.uri(), &dir);
    let report = o
        .run_batch(&[design("wave.png", "Wave")], &["tshirt".to_string()])
        .await
        .expect("batch runs");
    assert_eq!(report.summary.created, 1);

    let requests = server.received_requests().await.expect("recording enabled");
    let create = requests
        .iter()
        .find(|r| r.url.path() == "/store/products")
        .expect("create request sent");
    let body: serde_json::Value = serde_json::from_slice(&create.body).expect("json body");
    let variants = body["sync_variants"].as_array().expect("variants array");

    // First color group of the bundled t-shirt: S..4XL.
    let first_group: Vec<(&str, i64)> = variants[..7]
        .iter()
        .map(|v| {
            (
                v["retail_price"].as_str().unwrap(),
                v["variant_id"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        first_group,
        vec![
            ("26.95", 4016),
            ("26.95", 4017),
            ("26.95", 4018),
            ("26.95", 4019),
            ("29.95", 4020),
            ("32.95", 5295),
            ("32.95", 5296),
        ]
    );
    assert!(variants
        .iter()
        .all(|v| v["files"] == json!([{"id": 55, "preview_url": "https://cdn.example.com/55.png"}])));

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn unreachable_service_fails_each_design_once() {
    let dir = uploads_dir(&[("s.png", "s")]);
    let o = orchestrator("http://127.0.0.1:9", &dir);

    let report = o
        .run_batch(&[design("s.png", "Sunset")], &["tshirt".to_string()])
        .await
        .expect("batch runs");

    assert_eq!(report.summary.created, 0);
    assert_eq!(report.summary.failed, 1);
    assert!(report.errors[0].message.starts_with("Failed to upload design"));

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn unreachable_service_records_one_error_regardless_of_type_count() {
    let dir = uploads_dir(&[("s.png", "s"), ("m.png", "m")]);
    let o = orchestrator("http://127.0.0.1:9", &dir);
    let types = ["tshirt", "hoodie", "sweatshirt"].map(String::from);

    let report = o
        .run_batch(&[design("s.png", "Sunset")], &types)
        .await
        .expect("batch runs");
    assert_eq!(report.summary.created, 0);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.errors[0].garment_type, None);

    // Defaulted type list behaves the same, one error per design.
    let report = o
        .run_batch(&[design("s.png", "Sunset"), design("m.png", "Moon")], &[])
        .await
        .expect("batch runs");
    assert_eq!(report.summary.created, 0);
    assert_eq!(report.summary.failed, 2);
    assert!(report
        .errors
        .iter()
        .all(|e| e.garment_type.is_none() && e.message.starts_with("Failed to upload design")));

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn api_error_on_one_type_keeps_the_others() {
    let server = MockServer::start().await;
    mount_file_upload(&server, 8).await;

    Mock::given(method("POST"))
        .and(path("/store/products"))
        .and(body_partial_json(json!({
            "sync_product": {"name": "Moon Unisex Heavy Blend Hoodie"}
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "result": "Variant is discontinued"
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/store/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "result": {"id": 3}
        })))
        .mount(&server)
        .await;

    let dir = uploads_dir(&[("moon.png", "moon")]);
    let o = orchestrator(&server.uri(), &dir);
    let report = o
        .run_batch(&[design("moon.png", "Moon")], &[])
        .await
        .expect("batch runs");

    assert_eq!(report.summary.created, 2);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.errors[0].garment_type.as_deref(), Some("hoodie"));
    assert!(report.errors[0].message.contains("Variant is discontinued"));

    std::fs::remove_dir_all(dir).ok();
}

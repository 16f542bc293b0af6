use serde_json::json;

use super::*;

fn test_client(base_url: &str) -> PrintfulClient {
    PrintfulClient::with_base_url("test-token", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_appends_to_base_path() {
    let client = test_client("https://api.printful.com");
    assert_eq!(
        client.endpoint("files").unwrap().as_str(),
        "https://api.printful.com/files"
    );
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("http://localhost:9999/proxy/");
    assert_eq!(
        client.endpoint("/store/products").unwrap().as_str(),
        "http://localhost:9999/proxy/store/products"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = PrintfulClient::with_base_url("t", 30, "not a url");
    assert!(matches!(result, Err(PrintfulError::InvalidBaseUrl { .. })));
}

#[test]
fn debug_redacts_token() {
    let client = test_client("https://api.printful.com");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("test-token"));
}

#[test]
fn check_api_error_passes_success_code() {
    assert!(PrintfulClient::check_api_error(&json!({"code": 200, "result": {}})).is_ok());
}

#[test]
fn check_api_error_passes_missing_code() {
    assert!(PrintfulClient::check_api_error(&json!({"result": {"id": 1}})).is_ok());
}

#[test]
fn check_api_error_uses_string_result_as_message() {
    let err = PrintfulClient::check_api_error(&json!({
        "code": 400,
        "result": "Invalid variant id",
        "error": {"reason": "BadRequest", "message": "Other text"}
    }))
    .unwrap_err();
    assert!(
        matches!(err, PrintfulError::Api { code: 400, ref message } if message == "Invalid variant id"),
        "got: {err:?}"
    );
}

#[test]
fn check_api_error_falls_back_to_error_message() {
    let err = PrintfulClient::check_api_error(&json!({
        "code": 401,
        "result": null,
        "error": {"reason": "Unauthorized", "message": "Malformed token"}
    }))
    .unwrap_err();
    assert!(
        matches!(err, PrintfulError::Api { code: 401, ref message } if message == "Malformed token"),
        "got: {err:?}"
    );
}

#[test]
fn check_api_error_without_detail() {
    let err = PrintfulClient::check_api_error(&json!({"code": 500})).unwrap_err();
    assert!(
        matches!(err, PrintfulError::Api { code: 500, ref message } if message == "unknown error"),
        "got: {err:?}"
    );
}

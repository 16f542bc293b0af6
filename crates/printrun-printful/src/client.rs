//! HTTP client for the Printful REST API.
//!
//! Wraps `reqwest` with Printful-specific auth, envelope handling, and typed
//! response deserialization. Every call is a single round trip; nothing is
//! retried here.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PrintfulError;
use crate::types::{Envelope, ErrorDetail, SUCCESS_CODE};

pub const DEFAULT_BASE_URL: &str = "https://api.printful.com/";

/// Client for the Printful REST API.
///
/// Use [`PrintfulClient::new`] for production or
/// [`PrintfulClient::with_base_url`] to point at a mock server in tests.
pub struct PrintfulClient {
    pub(crate) client: Client,
    token: String,
    base_url: Url,
}

impl std::fmt::Debug for PrintfulClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintfulClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl PrintfulClient {
    /// Creates a client pointed at the production Printful API.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64) -> Result<Self, PrintfulError> {
        Self::with_base_url(token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PrintfulError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PrintfulError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PrintfulError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("printrun/0.1 (bulk-listing)")
            .build()?;

        // Exactly one trailing slash, so `join("files")` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PrintfulError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, PrintfulError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PrintfulError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    /// POSTs `body` as JSON to `path` and unwraps the `result` of the envelope.
    ///
    /// # Errors
    ///
    /// - [`PrintfulError::Http`] on network failure.
    /// - [`PrintfulError::Deserialize`] if the body is not the expected JSON.
    /// - [`PrintfulError::Api`] if the envelope `code` is not 200.
    /// - [`PrintfulError::UnexpectedStatus`] for a non-2xx status with no envelope code.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, PrintfulError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| PrintfulError::Deserialize {
                context: format!("POST {}", url.path()),
                source: e,
            })?;

        Self::check_api_error(&value)?;

        if !status.is_success() {
            return Err(PrintfulError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_value(value).map_err(|e| PrintfulError::Deserialize {
                context: format!("POST {} result", url.path()),
                source: e,
            })?;
        Ok(envelope.result)
    }

    /// Returns [`PrintfulError::Api`] when the envelope carries a numeric
    /// `code` other than [`SUCCESS_CODE`].
    pub(crate) fn check_api_error(body: &serde_json::Value) -> Result<(), PrintfulError> {
        let Some(code) = body.get("code").and_then(serde_json::Value::as_i64) else {
            return Ok(());
        };
        if code == SUCCESS_CODE {
            return Ok(());
        }

        let detail = body
            .get("error")
            .and_then(|e| serde_json::from_value::<ErrorDetail>(e.clone()).ok());
        let message = body
            .get("result")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .or_else(|| detail.as_ref().and_then(|d| d.message.clone()))
            .or_else(|| detail.and_then(|d| d.reason))
            .unwrap_or_else(|| "unknown error".to_string());

        Err(PrintfulError::Api { code, message })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

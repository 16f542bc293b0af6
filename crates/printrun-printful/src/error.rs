use thiserror::Error;

/// Errors returned by the Printful API client.
#[derive(Debug, Error)]
pub enum PrintfulError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response envelope carried a `code` other than 200.
    #[error("Printful API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Non-2xx HTTP status with no envelope `code` to explain it.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PrintfulError {
    /// `true` for failures below the application protocol: connection
    /// problems, timeouts, and bodies that are not the expected JSON.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Deserialize { .. })
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Bearer credential for the remote catalog. `None` is allowed at startup
    /// so the health probe can report it; bulk creation refuses to run without it.
    pub printful_api_token: Option<String>,
    pub printful_base_url: String,
    pub request_timeout_secs: u64,
    /// Pause inserted after every remote (design, product type) attempt.
    pub throttle_ms: u64,
    pub uploads_dir: PathBuf,
    /// Optional YAML catalog overriding the bundled one.
    pub templates_path: Option<PathBuf>,
}

impl AppConfig {
    #[must_use]
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    #[must_use]
    pub fn has_printful_token(&self) -> bool {
        self.printful_api_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "printful_api_token",
                &self.printful_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("printful_base_url", &self.printful_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("throttle_ms", &self.throttle_ms)
            .field("uploads_dir", &self.uploads_dir)
            .field("templates_path", &self.templates_path)
            .finish()
    }
}

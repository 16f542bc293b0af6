use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_PRINTFUL_BASE_URL: &str = "https://api.printful.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PRINTRUN_ENV", "development"))?;
    let bind_addr = parse_addr("PRINTRUN_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PRINTRUN_LOG_LEVEL", "info");

    let printful_api_token = optional("PRINTFUL_API_TOKEN");
    let printful_base_url = or_default("PRINTFUL_BASE_URL", DEFAULT_PRINTFUL_BASE_URL);
    if !(printful_base_url.starts_with("http://") || printful_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRINTFUL_BASE_URL".to_string(),
            reason: format!("'{printful_base_url}' must start with http:// or https://"),
        });
    }

    let request_timeout_secs = parse_u64("PRINTRUN_REQUEST_TIMEOUT_SECS", "60")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRINTRUN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let throttle_ms = parse_u64("PRINTRUN_THROTTLE_MS", "550")?;

    let uploads_dir = PathBuf::from(or_default("PRINTRUN_UPLOADS_DIR", "./uploads"));
    let templates_path = optional("PRINTRUN_TEMPLATES_PATH").map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        printful_api_token,
        printful_base_url,
        request_timeout_secs,
        throttle_ms,
        uploads_dir,
        templates_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PRINTRUN_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

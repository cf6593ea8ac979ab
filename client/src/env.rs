//! Configuration from environment variables.

use deepl_core::{ClientConfig, DeeplError};
use tracing::info;

pub const AUTH_KEY_VAR: &str = "DEEPL_AUTH_KEY";
pub const PRO_VAR: &str = "DEEPL_PRO";
pub const API_URL_VAR: &str = "DEEPL_API_URL";

/// Load configuration from the process environment.
pub fn config_from_env() -> Result<ClientConfig, DeeplError> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Load configuration through `lookup`, which maps a variable name to its value.
pub fn config_from_lookup<F>(lookup: F) -> Result<ClientConfig, DeeplError>
where
    F: Fn(&str) -> Option<String>,
{
    let auth_key = lookup(AUTH_KEY_VAR)
        .ok_or_else(|| DeeplError::Config(format!("{AUTH_KEY_VAR} environment variable is required")))?;

    let pro = match lookup(PRO_VAR) {
        Some(value) => parse_flag(&value)
            .ok_or_else(|| DeeplError::Config(format!("{PRO_VAR} must be a boolean, got {value:?}")))?,
        None => false,
    };

    let mut config = ClientConfig::new(auth_key).pro(pro);
    if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.is_empty()) {
        info!(%url, "using API URL override");
        config = config.base_url(url);
    }
    config.validate()?;
    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

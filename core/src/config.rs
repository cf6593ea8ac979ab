//! Client configuration: authentication key and tier selection.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::DeeplError;

/// Base URL of the free tier.
pub const BASE_URL_FREE: &str = "https://api-free.deepl.com/";

/// Base URL of the pro tier.
pub const BASE_URL_PRO: &str = "https://api.deepl.com/";

/// API version segment inserted between base URL and endpoint path.
pub const API_VERSION: &str = "v2";

/// Immutable configuration consumed by `DeeplClient::new`.
///
/// The base URL is resolved once, when the client is built, from `pro` or
/// from an explicit override pointing at a local fake.
pub struct ClientConfig {
    auth_key: SecretString,
    pro: bool,
    base_url: Option<String>,
}

impl ClientConfig {
    /// Free-tier configuration for the given authentication key.
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: SecretString::from(auth_key.into()),
            pro: false,
            base_url: None,
        }
    }

    pub fn pro(mut self, pro: bool) -> Self {
        self.pro = pro;
        self
    }

    /// Send requests to `url` instead of the tier's host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn is_pro(&self) -> bool {
        self.pro
    }

    pub fn auth_key(&self) -> &SecretString {
        &self.auth_key
    }

    pub fn validate(&self) -> Result<(), DeeplError> {
        if self.auth_key.expose_secret().trim().is_empty() {
            return Err(DeeplError::Config("authentication key is required".to_string()));
        }
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(DeeplError::Config(format!("base URL must be http(s): {url}")));
            }
        }
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (String, SecretString) {
        let base_url = self.resolved_base_url();
        (base_url, self.auth_key)
    }

    /// The base URL every request of the owning client starts with,
    /// always ending in `/`.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => format!("{}/", url.trim_end_matches('/')),
            None if self.pro => BASE_URL_PRO.to_string(),
            None => BASE_URL_FREE.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_key", &"[REDACTED]")
            .field("pro", &self.pro)
            .field("base_url", &self.base_url)
            .finish()
    }
}

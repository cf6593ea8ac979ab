//! The adapter contract, in a blocking and a cooperative flavour.
//!
//! Implementors provide `request`; the three high-level operations are
//! defined once here on top of it and the extraction helpers in
//! `deepl_core::client`, so both flavours behave identically.

use async_trait::async_trait;
use deepl_core::client::{self, LANGUAGES_PATH, TRANSLATE_PATH, USAGE_PATH};
use deepl_core::{DeeplError, HttpMethod, Params};
use serde_json::{Map, Value};

/// Blocking adapter contract.
pub trait Adapter {
    /// Issue a request and return the decoded body, `None` when the body
    /// was empty or not JSON.
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>, DeeplError>;

    /// POST `/translate` and return the first translation's text.
    fn get_translated_text(&self, params: Params) -> Result<String, DeeplError> {
        client::translated_text(self.request(HttpMethod::Post, TRANSLATE_PATH, params)?)
    }

    fn get_usage(&self) -> Result<Map<String, Value>, DeeplError> {
        client::usage(self.request(HttpMethod::Post, USAGE_PATH, Params::new())?)
    }

    fn get_supported_languages(&self) -> Result<Vec<Map<String, Value>>, DeeplError> {
        client::languages(self.request(HttpMethod::Post, LANGUAGES_PATH, Params::new())?)
    }
}

/// Cooperative adapter contract; every operation is a suspension point.
#[async_trait]
pub trait AsyncAdapter: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>, DeeplError>;

    async fn get_translated_text(&self, params: Params) -> Result<String, DeeplError> {
        client::translated_text(self.request(HttpMethod::Post, TRANSLATE_PATH, params).await?)
    }

    async fn get_usage(&self) -> Result<Map<String, Value>, DeeplError> {
        client::usage(self.request(HttpMethod::Post, USAGE_PATH, Params::new()).await?)
    }

    async fn get_supported_languages(&self) -> Result<Vec<Map<String, Value>>, DeeplError> {
        client::languages(
            self.request(HttpMethod::Post, LANGUAGES_PATH, Params::new())
                .await?,
        )
    }
}

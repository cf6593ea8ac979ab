//! The seam between the adapters and an HTTP library.
//!
//! A transport replays an `HttpRequest` exactly as built (method, URL with
//! query string, headers, optional body) and returns the raw response. It
//! must hand back 4xx/5xx responses as data; only failures that produce no
//! response at all become `DeeplError::Transport`. Bodies are read as raw
//! bytes and decoded with `decode_body`, so an undecodable body is left for
//! the status code to judge.

use std::sync::Arc;

use async_trait::async_trait;
use deepl_core::{DeeplError, HttpRequest, HttpResponse};

/// Executes requests on the calling thread.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError>;
}

/// Executes requests by suspending the calling task during network I/O.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError> {
        (**self).execute(request)
    }
}

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError> {
        (**self).execute(request).await
    }
}

/// Copy response headers, dropping values that are not valid UTF-8.
pub(crate) fn collect_headers(headers: &http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Decode a response body, replacing invalid UTF-8 sequences.
pub(crate) fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

//! Cooperative adapter backed by `reqwest`.
//!
//! Requests suspend the calling task at the network boundary only. Dropping
//! a pending future abandons the in-flight HTTP call.

use async_trait::async_trait;
use deepl_core::{
    ClientConfig, DeeplClient, DeeplError, HttpMethod, HttpRequest, HttpResponse, Params,
};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::adapter::AsyncAdapter;
use crate::transport::{collect_headers, decode_body, AsyncTransport};

/// `reqwest` client with the library's default settings.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Fails when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, DeeplError> {
        let client = Client::builder().build().map_err(DeeplError::transport)?;
        Ok(Self { client })
    }

    /// Use a preconfigured client, e.g. one with a proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl AsyncTransport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError> {
        let mut builder = self
            .client
            .request(reqwest_method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(DeeplError::transport)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let bytes = response.bytes().await.map_err(DeeplError::transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body: decode_body(&bytes),
        })
    }
}

/// Adapter whose operations are futures to be awaited.
///
/// Any number of calls may be in flight at once as independent tasks; they
/// share only the immutable configuration.
pub struct NonBlockingAdapter<T = ReqwestTransport> {
    client: DeeplClient,
    transport: T,
}

impl NonBlockingAdapter<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, DeeplError> {
        Self::with_transport(config, ReqwestTransport::new()?)
    }
}

impl<T: AsyncTransport> NonBlockingAdapter<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, DeeplError> {
        Ok(Self {
            client: DeeplClient::new(config)?,
            transport,
        })
    }

    pub fn client(&self) -> &DeeplClient {
        &self.client
    }
}

#[async_trait]
impl<T: AsyncTransport> AsyncAdapter for NonBlockingAdapter<T> {
    #[tracing::instrument(skip(self, params))]
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>, DeeplError> {
        let request = self.client.build_request(method, path, params)?;
        let response = self.transport.execute(&request).await?;
        debug!(status = response.status, "response received");
        self.client.parse_response(response)
    }
}

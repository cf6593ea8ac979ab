//! Blocking adapter backed by `ureq`.

use deepl_core::{
    ClientConfig, DeeplClient, DeeplError, HttpMethod, HttpRequest, HttpResponse, Params,
};
use serde_json::Value;
use tracing::debug;
use ureq::{Agent, RequestBuilder};

use crate::adapter::Adapter;
use crate::transport::{collect_headers, decode_body, Transport};

/// `ureq` agent configured to return error statuses as data.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, DeeplError> {
        let url = request.url.as_str();
        let headers = &request.headers;
        let body = request.body.as_deref();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(url), headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(url), headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(DeeplError::transport)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(DeeplError::transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body: decode_body(&bytes),
        })
    }
}

/// Adapter that blocks the calling thread for the whole round trip.
///
/// Holds no mutable state, so one instance may be shared between threads
/// whenever the transport allows it (`UreqTransport` does).
pub struct BlockingAdapter<T = UreqTransport> {
    client: DeeplClient,
    transport: T,
}

impl BlockingAdapter<UreqTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, DeeplError> {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> BlockingAdapter<T> {
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

impl<T: Transport> Adapter for BlockingAdapter<T> {
    #[tracing::instrument(skip(self, params))]
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<Option<Value>, DeeplError> {
        let request = self.client.build_request(method, path, params)?;
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, "response received");
        self.client.parse_response(response)
    }
}

//! Stateless HTTP request builder and response parser for the DeepL API.
//!
//! # Design
//! `DeeplClient` holds only the resolved base URL and the authentication key
//! and carries no mutable state between calls. `build_request` produces an
//! `HttpRequest`; `parse_response` consumes an `HttpResponse` and either
//! yields the decoded JSON body or the typed error for its status. The
//! adapters execute the round-trip in between, which keeps every decision
//! that matters (URL, header, parameters, error mapping) in one place.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{ClientConfig, API_VERSION};
use crate::error::{DeeplError, ErrorKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Params, FORM_CONTENT_TYPE};

pub const TRANSLATE_PATH: &str = "/translate";
pub const USAGE_PATH: &str = "/usage";
pub const LANGUAGES_PATH: &str = "/languages";

/// Name of the injected authentication parameter.
pub const AUTH_KEY_PARAM: &str = "auth_key";

/// Request builder and response parser shared by both adapters.
pub struct DeeplClient {
    base_url: String,
    auth_key: SecretString,
}

impl DeeplClient {
    pub fn new(config: ClientConfig) -> Result<Self, DeeplError> {
        config.validate()?;
        let (base_url, auth_key) = config.into_parts();
        Ok(Self { base_url, auth_key })
    }

    /// Base URL fixed at construction, ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base_url}{api_version}{path}` with `params` plus `auth_key`
    /// encoded into the query string.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        mut params: Params,
    ) -> Result<HttpRequest, DeeplError> {
        params.insert(
            AUTH_KEY_PARAM.to_string(),
            self.auth_key.expose_secret().to_string(),
        );
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| DeeplError::Serialization(e.to_string()))?;
        debug!(method = method.as_str(), path, "building request");
        Ok(HttpRequest {
            method,
            url: format!("{}{API_VERSION}{path}?{query}", self.base_url),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: None,
        })
    }

    pub fn build_translate(&self, params: Params) -> Result<HttpRequest, DeeplError> {
        self.build_request(HttpMethod::Post, TRANSLATE_PATH, params)
    }

    pub fn build_usage(&self) -> Result<HttpRequest, DeeplError> {
        self.build_request(HttpMethod::Post, USAGE_PATH, Params::new())
    }

    pub fn build_languages(&self) -> Result<HttpRequest, DeeplError> {
        self.build_request(HttpMethod::Post, LANGUAGES_PATH, Params::new())
    }

    /// Decode the body and turn non-2xx statuses into typed errors.
    ///
    /// An empty or non-JSON body decodes to `None`; it never fails the call
    /// on its own.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Option<Value>, DeeplError> {
        let data = decode_body(&response.body);
        if response.is_success() {
            return Ok(data);
        }
        let message = data
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let kind = ErrorKind::from_status(response.status);
        warn!(status = response.status, %kind, %message, "API returned an error");
        Err(DeeplError::Api {
            kind,
            message,
            response,
        })
    }
}

fn decode_body(body: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Text of the first entry in a translate response's `translations`.
pub fn translated_text(data: Option<Value>) -> Result<String, DeeplError> {
    data.as_ref()
        .and_then(|v| v.get("translations"))
        .and_then(|t| t.get(0))
        .and_then(|t| t.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DeeplError::MalformedResponse("expected translations[0].text".to_string()))
}

/// The usage body, passed through untouched.
pub fn usage(data: Option<Value>) -> Result<Map<String, Value>, DeeplError> {
    match data {
        Some(Value::Object(map)) => Ok(map),
        other => Err(DeeplError::MalformedResponse(format!(
            "expected usage object, got {}",
            describe(other.as_ref())
        ))),
    }
}

/// The languages body, passed through untouched.
pub fn languages(data: Option<Value>) -> Result<Vec<Map<String, Value>>, DeeplError> {
    let items = match data {
        Some(Value::Array(items)) => items,
        other => {
            return Err(DeeplError::MalformedResponse(format!(
                "expected language list, got {}",
                describe(other.as_ref())
            )))
        }
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(DeeplError::MalformedResponse(format!(
                "expected language object, got {}",
                describe(Some(&other))
            ))),
        })
        .collect()
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "nothing",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

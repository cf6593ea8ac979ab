//! Error types for the DeepL API client.
//!
//! # Design
//! Every non-2xx status maps onto exactly one `ErrorKind` through a single
//! lookup (`ErrorKind::from_status`). The resulting `DeeplError::Api` keeps the
//! original response and the provider's `message` field so callers can decide
//! what to do; nothing here retries or downgrades an error.
//!
//! A body that is not JSON is never an error by itself. Only the status code
//! decides success or failure.

use std::fmt;

use thiserror::Error;

use crate::http::HttpResponse;

/// Boxed source error produced by a transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of API failure kinds, one per status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 403, usually a wrong or missing auth key.
    Forbidden,
    /// 404
    NotFound,
    /// 413
    PayloadTooLarge,
    /// 414
    UriTooLong,
    /// 429
    TooManyRequests,
    /// 456, the account's character quota is used up.
    QuotaExceeded,
    /// 503
    ServiceUnavailable,
    /// Any other 5xx.
    InternalServerError,
    /// Any other non-2xx status.
    Http,
}

impl ErrorKind {
    /// Map a non-2xx status code to its error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            413 => ErrorKind::PayloadTooLarge,
            414 => ErrorKind::UriTooLong,
            429 => ErrorKind::TooManyRequests,
            456 => ErrorKind::QuotaExceeded,
            503 => ErrorKind::ServiceUnavailable,
            500..=599 => ErrorKind::InternalServerError,
            _ => ErrorKind::Http,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::PayloadTooLarge => "payload too large",
            ErrorKind::UriTooLong => "URI too long",
            ErrorKind::TooManyRequests => "too many requests",
            ErrorKind::QuotaExceeded => "quota exceeded",
            ErrorKind::ServiceUnavailable => "service unavailable",
            ErrorKind::InternalServerError => "internal server error",
            ErrorKind::Http => "HTTP error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by the client and both adapters.
#[derive(Debug, Error)]
pub enum DeeplError {
    /// The API answered with a non-2xx status.
    #[error("{kind} (HTTP {}): {message}", .response.status)]
    Api {
        kind: ErrorKind,
        message: String,
        response: HttpResponse,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A 2xx body did not have the shape the operation expects.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),

    /// The request parameters could not be encoded.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The client configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DeeplError {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        DeeplError::Transport(err.into())
    }

    /// The API error kind, if this error came from a status code.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DeeplError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DeeplError::Api { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// Provider-supplied message; empty when the body carried none.
    pub fn message(&self) -> Option<&str> {
        match self {
            DeeplError::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            DeeplError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_statuses_map_to_their_kind() {
        let table = [
            (400, ErrorKind::BadRequest),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (413, ErrorKind::PayloadTooLarge),
            (414, ErrorKind::UriTooLong),
            (429, ErrorKind::TooManyRequests),
            (456, ErrorKind::QuotaExceeded),
            (503, ErrorKind::ServiceUnavailable),
        ];
        for (status, kind) in table {
            assert_eq!(ErrorKind::from_status(status), kind, "status {status}");
        }
    }

    #[test]
    fn remaining_5xx_are_internal_server_errors() {
        for status in (500..600).filter(|s| *s != 503) {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::InternalServerError);
        }
    }

    #[test]
    fn everything_else_is_generic_http() {
        for status in [100, 301, 302, 401, 402, 405, 418, 422, 455, 457, 600, 999] {
            assert_eq!(ErrorKind::from_status(status), ErrorKind::Http, "status {status}");
        }
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = DeeplError::Api {
            kind: ErrorKind::QuotaExceeded,
            message: "Quota exceeded".to_string(),
            response: HttpResponse {
                status: 456,
                headers: Vec::new(),
                body: String::new(),
            },
        };
        assert_eq!(err.to_string(), "quota exceeded (HTTP 456): Quota exceeded");
        assert_eq!(err.status(), Some(456));
        assert_eq!(err.message(), Some("Quota exceeded"));
    }

    #[test]
    fn non_api_errors_have_no_kind() {
        let err = DeeplError::MalformedResponse("missing field".to_string());
        assert!(err.kind().is_none());
        assert!(err.status().is_none());
        assert!(err.response().is_none());
    }

    #[test]
    fn transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = DeeplError::transport(io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "transport error: refused");
    }
}

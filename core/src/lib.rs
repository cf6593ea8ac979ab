//! Transport-free client core for the DeepL translation API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The adapters in
//! `deepl-client` execute the actual HTTP round-trip, so both the blocking
//! and the cooperative flavour share every decision made here.
//!
//! # Design
//! - `DeeplClient` holds only the base URL (fixed at construction from the
//!   tier) and the authentication key.
//! - Requests carry their parameters in the query string and a form
//!   content-type header, with `auth_key` injected into a per-call map.
//! - Status codes map to a closed `ErrorKind` set; decoding failures of the
//!   body are not errors.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod options;

pub use client::DeeplClient;
pub use config::ClientConfig;
pub use error::{DeeplError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Params};
pub use options::{Formality, PreserveFormatting, SplitSentences, TranslateOptions, XmlOptions};

//! Blocking and cooperative adapters for the DeepL translation API.
//!
//! # Overview
//! Both adapters delegate URL building, parameter encoding and status
//! mapping to `deepl_core::DeeplClient` and differ only in how the HTTP
//! round-trip is scheduled:
//! - `BlockingAdapter` runs it on the calling thread through `ureq`.
//! - `NonBlockingAdapter` awaits it through `reqwest`.
//!
//! The transport is a generic parameter, so tests can swap in a recording
//! stub and compare the requests both adapters produce.

pub mod adapter;
pub mod blocking;
pub mod env;
pub mod nonblocking;
pub mod transport;
pub mod translator;

pub use adapter::{Adapter, AsyncAdapter};
pub use blocking::{BlockingAdapter, UreqTransport};
pub use nonblocking::{NonBlockingAdapter, ReqwestTransport};
pub use transport::{AsyncTransport, Transport};
pub use translator::{AsyncTranslator, Translator};

pub use deepl_core::{
    ClientConfig, DeeplError, ErrorKind, Formality, HttpMethod, HttpRequest, HttpResponse, Params,
    PreserveFormatting, SplitSentences, TranslateOptions, XmlOptions,
};

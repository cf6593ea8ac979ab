//! End-to-end runs of both adapters against the mock API over real HTTP.
//!
//! # Design
//! Each test starts its own mock server on a random port in a background
//! thread, so usage counters never leak between tests, then points the
//! adapter at it through the base URL override.

use std::net::SocketAddr;

use deepl_client::{
    Adapter, AsyncAdapter, AsyncTranslator, BlockingAdapter, ClientConfig, DeeplError, ErrorKind,
    HttpMethod, NonBlockingAdapter, Params, TranslateOptions, Translator,
};
use mock_server::DEFAULT_AUTH_KEY;

fn spawn_server() -> SocketAddr {
    mock_server::spawn_on_random_port().unwrap()
}

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(DEFAULT_AUTH_KEY).base_url(format!("http://{addr}"))
}

fn raw() -> Params {
    let mut params = Params::new();
    params.insert("raw".to_string(), "1".to_string());
    params
}

fn message(text: &str) -> Params {
    let mut params = Params::new();
    params.insert("message".to_string(), text.to_string());
    params
}

const ERROR_TABLE: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::BadRequest),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::NotFound),
    (413, ErrorKind::PayloadTooLarge),
    (414, ErrorKind::UriTooLong),
    (429, ErrorKind::TooManyRequests),
    (456, ErrorKind::QuotaExceeded),
    (503, ErrorKind::ServiceUnavailable),
    (500, ErrorKind::InternalServerError),
    (502, ErrorKind::InternalServerError),
    (418, ErrorKind::Http),
];

// ---------------------------------------------------------------------------
// Blocking
// ---------------------------------------------------------------------------

#[test]
fn blocking_translate_usage_languages() {
    let addr = spawn_server();
    let translator = Translator::new(BlockingAdapter::new(config(addr)).unwrap());

    let text = translator
        .translate("Hello", &TranslateOptions::new("DE"))
        .unwrap();
    assert_eq!(text, "Hallo");

    let usage = translator.usage().unwrap();
    assert_eq!(usage["character_count"], 5);
    assert_eq!(usage["character_limit"], 500_000);

    let languages = translator.supported_languages().unwrap();
    assert!(languages
        .iter()
        .any(|l| l["language"] == "EN" && l["name"] == "English"));
}

#[test]
fn blocking_status_codes_map_to_kinds() {
    let addr = spawn_server();
    let adapter = BlockingAdapter::new(config(addr)).unwrap();

    for (status, kind) in ERROR_TABLE {
        let err = adapter
            .request(HttpMethod::Post, &format!("/status/{status}"), message("boom"))
            .unwrap_err();
        assert_eq!(err.kind(), Some(*kind), "status {status}");
        assert_eq!(err.message(), Some("boom"), "status {status}");
        assert_eq!(err.status(), Some(*status));
    }
}

#[test]
fn blocking_non_json_bodies_are_tolerated() {
    let addr = spawn_server();
    let adapter = BlockingAdapter::new(config(addr)).unwrap();
    let mut plain = Params::new();
    plain.insert("plain".to_string(), "1".to_string());

    let ok = adapter
        .request(HttpMethod::Post, "/status/200", plain.clone())
        .unwrap();
    assert_eq!(ok, None);

    let err = adapter
        .request(HttpMethod::Get, "/status/503", plain)
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::ServiceUnavailable));
    assert_eq!(err.message(), Some(""));
}

#[test]
fn blocking_non_utf8_bodies_are_judged_by_status() {
    let addr = spawn_server();
    let adapter = BlockingAdapter::new(config(addr)).unwrap();

    let ok = adapter.request(HttpMethod::Post, "/status/200", raw()).unwrap();
    assert_eq!(ok, None);

    let err = adapter
        .request(HttpMethod::Post, "/status/503", raw())
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::ServiceUnavailable));
    assert_eq!(err.message(), Some(""));
}

#[test]
fn blocking_wrong_key_is_forbidden() {
    let addr = spawn_server();
    let adapter =
        BlockingAdapter::new(ClientConfig::new("wrong").base_url(format!("http://{addr}")))
            .unwrap();

    let err = adapter.get_usage().unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Forbidden));
    assert_eq!(err.message(), Some("Wrong auth key"));
}

#[test]
fn blocking_unreachable_host_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let adapter = BlockingAdapter::new(config(addr)).unwrap();

    let err = adapter.get_usage().unwrap_err();
    assert!(matches!(err, DeeplError::Transport(_)), "{err}");
}

// ---------------------------------------------------------------------------
// Non-blocking
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nonblocking_translate_usage_languages() {
    let addr = spawn_server();
    let translator = AsyncTranslator::new(NonBlockingAdapter::new(config(addr)).unwrap());

    let text = translator
        .translate("Good morning", &TranslateOptions::new("DE"))
        .await
        .unwrap();
    assert_eq!(text, "Guten Morgen");

    let usage = translator.usage().await.unwrap();
    assert_eq!(usage["character_count"], 12);

    let languages = translator.supported_languages().await.unwrap();
    assert!(languages.iter().any(|l| l["language"] == "DE"));
}

#[tokio::test]
async fn nonblocking_status_codes_map_to_kinds() {
    let addr = spawn_server();
    let adapter = NonBlockingAdapter::new(config(addr)).unwrap();

    for (status, kind) in ERROR_TABLE {
        let err = adapter
            .request(HttpMethod::Post, &format!("/status/{status}"), message("boom"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(*kind), "status {status}");
        assert_eq!(err.message(), Some("boom"), "status {status}");
    }
}

#[tokio::test]
async fn nonblocking_non_utf8_bodies_are_judged_by_status() {
    let addr = spawn_server();
    let adapter = NonBlockingAdapter::new(config(addr)).unwrap();

    let ok = adapter
        .request(HttpMethod::Post, "/status/200", raw())
        .await
        .unwrap();
    assert_eq!(ok, None);

    let err = adapter
        .request(HttpMethod::Post, "/status/503", raw())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::ServiceUnavailable));
    assert_eq!(err.message(), Some(""));
}

#[tokio::test]
async fn blocking_and_nonblocking_see_the_same_non_utf8_response() {
    let addr = spawn_server();
    let blocking = BlockingAdapter::new(config(addr)).unwrap();
    let nonblocking = NonBlockingAdapter::new(config(addr)).unwrap();

    let from_blocking = tokio::task::spawn_blocking(move || {
        blocking.request(HttpMethod::Get, "/status/503", raw())
    })
    .await
    .unwrap()
    .unwrap_err();
    let from_nonblocking = nonblocking
        .request(HttpMethod::Get, "/status/503", raw())
        .await
        .unwrap_err();

    assert_eq!(from_blocking.to_string(), from_nonblocking.to_string());
    assert_eq!(
        from_blocking.response().map(|r| r.body.as_str()),
        from_nonblocking.response().map(|r| r.body.as_str())
    );
}

#[tokio::test]
async fn nonblocking_concurrent_translations() {
    let addr = spawn_server();
    let translator = AsyncTranslator::new(NonBlockingAdapter::new(config(addr)).unwrap());
    let de = TranslateOptions::new("DE");
    let fr = TranslateOptions::new("FR");

    let (a, b, c) = tokio::join!(
        translator.translate("Hello", &de),
        translator.translate("Hello", &fr),
        translator.translate("Untranslated", &de),
    );
    assert_eq!(a.unwrap(), "Hallo");
    assert_eq!(b.unwrap(), "Bonjour");
    assert_eq!(c.unwrap(), "Untranslated");

    let usage = translator.usage().await.unwrap();
    assert_eq!(usage["character_count"], 5 + 5 + 12);
}

#[tokio::test]
async fn nonblocking_missing_target_is_bad_request() {
    let addr = spawn_server();
    let adapter = NonBlockingAdapter::new(config(addr)).unwrap();
    let mut params = Params::new();
    params.insert("text".to_string(), "Hello".to_string());

    let err = adapter.get_translated_text(params).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::BadRequest));
    assert_eq!(err.message(), Some("Value for 'target_lang' not supported."));
}

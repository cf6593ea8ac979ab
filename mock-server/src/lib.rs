use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, error, info};

/// Authentication key accepted by `app()`.
pub const DEFAULT_AUTH_KEY: &str = "mock-auth-key";

/// Character quota of `app()`.
pub const DEFAULT_CHARACTER_LIMIT: u64 = 500_000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub character_count: u64,
    pub character_limit: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub language: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub detected_source_language: String,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translations: Vec<Translation>,
}

struct Account {
    auth_key: String,
    usage: Usage,
}

type Db = Arc<RwLock<Account>>;

const LANGUAGES: &[(&str, &str)] = &[
    ("DE", "German"),
    ("EN", "English"),
    ("FR", "French"),
    ("JA", "Japanese"),
];

const GLOSSARY: &[(&str, &str, &str)] = &[
    ("Hello", "DE", "Hallo"),
    ("Hello", "FR", "Bonjour"),
    ("Good morning", "DE", "Guten Morgen"),
    ("Hallo", "EN", "Hello"),
];

pub fn app() -> Router {
    app_with(DEFAULT_AUTH_KEY, DEFAULT_CHARACTER_LIMIT)
}

/// Router for an account with the given key and character quota.
pub fn app_with(auth_key: &str, character_limit: u64) -> Router {
    let db: Db = Arc::new(RwLock::new(Account {
        auth_key: auth_key.to_string(),
        usage: Usage {
            character_count: 0,
            character_limit,
        },
    }));
    Router::new()
        .route("/v2/translate", post(translate))
        .route("/v2/usage", post(usage))
        .route("/v2/languages", post(languages))
        .route("/v2/status/{code}", post(status).get(status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock DeepL API listening");
    }
    axum::serve(listener, app()).await
}

/// Serve `app()` on a random local port from a background thread.
pub fn spawn_on_random_port() -> std::io::Result<SocketAddr> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::spawn(move || {
        let served = runtime.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener).await
        });
        if let Err(err) = served {
            error!(%err, "mock DeepL API stopped");
        }
    });

    Ok(addr)
}

/// Body of `/v2/status/{code}?raw=1`; not valid UTF-8.
pub const RAW_BODY: &[u8] = &[0xff, 0xfe, 0x00];

type QueryParams = Query<HashMap<String, String>>;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn authorize(db: &Db, params: &HashMap<String, String>) -> Result<(), Response> {
    let account = db.read().await;
    match params.get("auth_key") {
        Some(key) if *key == account.auth_key => Ok(()),
        _ => Err(error(StatusCode::FORBIDDEN, "Wrong auth key")),
    }
}

fn translate_text(text: &str, target_lang: &str) -> Translation {
    let target = target_lang.to_ascii_uppercase();
    GLOSSARY
        .iter()
        .find(|(source, lang, _)| *source == text && target.starts_with(lang))
        .map(|(source, _, translated)| Translation {
            detected_source_language: if *source == "Hallo" { "DE" } else { "EN" }.to_string(),
            text: translated.to_string(),
        })
        .unwrap_or_else(|| Translation {
            detected_source_language: "EN".to_string(),
            text: text.to_string(),
        })
}

async fn translate(State(db): State<Db>, Query(params): QueryParams) -> Response {
    if let Err(resp) = authorize(&db, &params).await {
        return resp;
    }
    let Some(text) = params.get("text") else {
        return error(StatusCode::BAD_REQUEST, "Parameter 'text' not specified.");
    };
    let Some(target_lang) = params.get("target_lang") else {
        return error(StatusCode::BAD_REQUEST, "Value for 'target_lang' not supported.");
    };

    let characters = text.chars().count() as u64;
    let mut account = db.write().await;
    if account.usage.character_count + characters > account.usage.character_limit {
        return error(StatusCode::from_u16(456).unwrap_or(StatusCode::FORBIDDEN), "Quota exceeded");
    }
    account.usage.character_count += characters;
    debug!(characters, target_lang = %target_lang, "translated");

    Json(TranslateResponse {
        translations: vec![translate_text(text, target_lang)],
    })
    .into_response()
}

async fn usage(State(db): State<Db>, Query(params): QueryParams) -> Response {
    if let Err(resp) = authorize(&db, &params).await {
        return resp;
    }
    Json(db.read().await.usage.clone()).into_response()
}

async fn languages(State(db): State<Db>, Query(params): QueryParams) -> Response {
    if let Err(resp) = authorize(&db, &params).await {
        return resp;
    }
    let list: Vec<Language> = LANGUAGES
        .iter()
        .map(|(language, name)| Language {
            language: language.to_string(),
            name: name.to_string(),
        })
        .collect();
    Json(list).into_response()
}

/// Answer with the requested status. `message` in the query becomes the
/// JSON message; `plain=1` sends a non-JSON body instead and `raw=1` a body
/// that is not UTF-8 at all.
async fn status(Path(code): Path<u16>, Query(params): QueryParams) -> Response {
    let Ok(status) = StatusCode::from_u16(code) else {
        return error(StatusCode::BAD_REQUEST, "invalid status code");
    };
    if params.get("raw").is_some_and(|v| v == "1") {
        return (status, RAW_BODY.to_vec()).into_response();
    }
    if params.get("plain").is_some_and(|v| v == "1") {
        return (status, "plain text body").into_response();
    }
    match params.get("message") {
        Some(message) => error(status, message),
        None => (status, Json(json!({}))).into_response(),
    }
}

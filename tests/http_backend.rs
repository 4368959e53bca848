#![allow(clippy::unwrap_used)]
//! Completion client contract tests against a mock HTTP backend.
//!
//! Each test stands up a local OpenAI-compatible endpoint and checks that the
//! client sends one well-formed request and maps every outcome to either a
//! verbatim result or a `CallError`.

mod common;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{api_error, completion, spawn_server};
use gtl_cli::translation::{
    CallError, CompletionBackend, Credential, SYSTEM_PROMPT, TranslateError, TranslationClient,
    Translator, build_prompt,
};

const PATH: &str = "/v1/chat/completions";
const MODEL: &str = "llama-3.1-8b-instant";

fn client(base_url: &str) -> TranslationClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

fn client_with_timeout(base_url: &str, timeout: Duration) -> TranslationClient {
    TranslationClient::new(
        base_url.to_string(),
        Credential::new("gsk_test_key").unwrap(),
        timeout,
    )
}

/// Replies with `status` and a fixed JSON body.
async fn fixed_reply(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        PATH,
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    spawn_server(app).await
}

#[tokio::test]
async fn test_success_returns_text_exactly() {
    let base_url = fixed_reply(StatusCode::OK, completion("Bonjour")).await;
    let messages = build_prompt("Hello", "French");

    let result = client(&base_url).complete(&messages, MODEL).await.unwrap();

    assert_eq!(result.text, "Bonjour");
}

#[tokio::test]
async fn test_success_does_not_trim_or_reencode() {
    let raw = "  Bonjour, ça va ?\n\n";
    let base_url = fixed_reply(StatusCode::OK, completion(raw)).await;
    let messages = build_prompt("Hello, how are you?", "French");

    let result = client(&base_url).complete(&messages, MODEL).await.unwrap();

    assert_eq!(result.text, raw);
}

#[tokio::test]
async fn test_request_shape_and_auth_header() {
    let captured: Arc<Mutex<Vec<(HeaderMap, Value)>>> = Arc::default();
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        PATH,
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push((headers, body));
                Json(completion("Bonjour"))
            }
        }),
    );
    let base_url = spawn_server(app).await;

    let translator = Translator::new(client(&base_url), MODEL);
    translator.translate_text("Hello", "French").await.unwrap();

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);

    let (headers, body) = &requests[0];
    assert_eq!(headers["authorization"], "Bearer gsk_test_key");
    assert_eq!(
        body,
        &serde_json::json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": "Translate the following text to French:\n\nHello"},
            ]
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_endpoint() {
    let base_url = fixed_reply(StatusCode::OK, completion("Hola")).await;
    let messages = build_prompt("Hello", "Spanish");

    let result = client(&format!("{base_url}/"))
        .complete(&messages, MODEL)
        .await
        .unwrap();

    assert_eq!(result.text, "Hola");
}

#[tokio::test]
async fn test_unauthorized_is_call_error() {
    let base_url = fixed_reply(StatusCode::UNAUTHORIZED, api_error("Invalid API Key")).await;
    let messages = build_prompt("Hello", "French");

    let err = client(&base_url)
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Unauthorized { status: 401, .. }));
    assert!(err.to_string().contains("Invalid API Key"));
}

#[tokio::test]
async fn test_rate_limit_is_call_error() {
    let base_url = fixed_reply(
        StatusCode::TOO_MANY_REQUESTS,
        api_error("Rate limit reached for model"),
    )
    .await;
    let messages = build_prompt("Hello", "French");

    let err = client(&base_url)
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::RateLimited { .. }));
    assert!(err.to_string().contains("Rate limit reached"));
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let app = Router::new().route(
        PATH,
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let base_url = spawn_server(app).await;
    let messages = build_prompt("Hello", "French");

    let err = client(&base_url)
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Status { status: 502, .. }));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_malformed_body_is_call_error() {
    let app = Router::new().route(PATH, post(|| async { "definitely not json" }));
    let base_url = spawn_server(app).await;
    let messages = build_prompt("Hello", "French");

    let err = client(&base_url)
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_choices_is_call_error() {
    let base_url = fixed_reply(StatusCode::OK, serde_json::json!({"choices": []})).await;
    let messages = build_prompt("Hello", "French");

    let err = client(&base_url)
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let app = Router::new().route(
        PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(completion("too late"))
        }),
    );
    let base_url = spawn_server(app).await;
    let messages = build_prompt("Hello", "French");

    let err = client_with_timeout(&base_url, Duration::from_millis(200))
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Timeout(_)));
    assert_eq!(err.to_string(), "Request timed out after 0.2s");
}

#[tokio::test]
async fn test_connection_refused_is_call_error() {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let messages = build_prompt("Hello", "French");
    let err = client(&format!("http://{addr}"))
        .complete(&messages, MODEL)
        .await
        .unwrap_err();

    assert!(matches!(err, CallError::Transport { .. }));
    assert!(err.to_string().contains("Failed to connect"));
}

#[tokio::test]
async fn test_translator_wraps_call_error() {
    let base_url = fixed_reply(StatusCode::INTERNAL_SERVER_ERROR, api_error("boom")).await;

    let translator = Translator::new(client(&base_url), MODEL);
    let err = translator
        .translate_text("Hello", "French")
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::Call(CallError::Status { .. })));
    assert!(err.to_string().starts_with("An error occurred: "));
}

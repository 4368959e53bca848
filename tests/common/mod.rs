//! In-process mock of an OpenAI-compatible chat completion endpoint.

#![allow(dead_code, clippy::unwrap_used)]

use axum::Router;
use serde_json::{Value, json};

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A successful chat completion body carrying `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// An OpenAI-style error body.
pub fn api_error(message: &str) -> Value {
    json!({"error": {"message": message, "type": "invalid_request_error"}})
}

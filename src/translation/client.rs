use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::credential::Credential;
use super::error::CallError;
use super::prompt::PromptMessage;
use super::request::TranslationResult;

/// A remote text-completion service.
///
/// Implementations issue exactly one request per call and never retry.
pub trait CompletionBackend {
    fn complete(
        &self,
        messages: &[PromptMessage],
        model: &str,
    ) -> impl Future<Output = Result<TranslationResult, CallError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Chat-completion client for OpenAI-compatible endpoints such as Groq.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    credential: Credential,
    timeout: Duration,
}

impl TranslationClient {
    pub fn new(endpoint: String, credential: Credential, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credential,
            timeout,
        }
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    async fn send(
        &self,
        messages: &[PromptMessage],
        model: &str,
    ) -> Result<TranslationResult, CallError> {
        let url = self.completions_url();
        let chat_request = ChatCompletionRequest { model, messages };

        crate::verbose!("POST {url} (model: {model})");
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credential.expose())
            .timeout(self.timeout)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        crate::verbose!(
            "{status} in {} ms ({} bytes)",
            started.elapsed().as_millis(),
            body.len()
        );

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_completion(&body)
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> CallError {
        if source.is_timeout() {
            CallError::Timeout(self.timeout)
        } else {
            CallError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl CompletionBackend for TranslationClient {
    async fn complete(
        &self,
        messages: &[PromptMessage],
        model: &str,
    ) -> Result<TranslationResult, CallError> {
        self.send(messages, model).await
    }
}

fn status_error(status: StatusCode, body: &str) -> CallError {
    let message = error_message(status, body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CallError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => CallError::RateLimited { message },
        _ => CallError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

/// Extracts a readable message from an error response body.
///
/// Prefers the OpenAI-style `{"error": {"message": ...}}` payload, then the raw
/// body, then the canonical reason phrase of the status.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body)
        && !parsed.error.message.is_empty()
    {
        return parsed.error.message;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("no response body")
        .to_string()
}

fn parse_completion(body: &str) -> Result<TranslationResult, CallError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CallError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CallError::MalformedResponse("response contained no choices".into()))?;

    let text = choice
        .message
        .content
        .ok_or_else(|| CallError::MalformedResponse("response message has no content".into()))?;

    Ok(TranslationResult { text })
}

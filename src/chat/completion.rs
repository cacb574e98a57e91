use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompt::PromptMessage;
use crate::config::CompletionConfig;

pub const MAX_TOKENS: u32 = 150;
pub const TEMPERATURE: f32 = 0.7;
pub const FALLBACK_REPLY: &str = "Sorry, I could not process your request.";

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Invalid API key header value")]
    InvalidApiKey,
    /// The request failed or the response couldn't be decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("Status error: {1} (Status {0})")]
    Status(StatusCode, String),
}

/// Produces one assistant reply for a list of prompt messages.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(&self, messages: Vec<PromptMessage>) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug, Default)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionResponse {
    fn first_reply(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}

/// Client for an OpenAI-compatible `chat/completions` endpoint.
pub struct CompletionClient {
    client: Client,
    url: String,
    model: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &CompletionConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn request_headers(&self) -> Result<HeaderMap, CompletionError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| CompletionError::InvalidApiKey)?;
        headers.insert(header::AUTHORIZATION, auth);
        Ok(headers)
    }
}

#[async_trait]
impl ChatCompleter for CompletionClient {
    async fn complete(&self, messages: Vec<PromptMessage>) -> Result<String, CompletionError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let response = self
            .client
            .post(&self.url)
            .headers(self.request_headers()?)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(
                status,
                response.text().await.unwrap_or_default(),
            ));
        }
        let parsed = response.json::<CompletionResponse>().await?;
        Ok(parsed.first_reply())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::prompt::Role;
    use axum::{http::HeaderMap as AxumHeaders, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    fn client(url: String) -> CompletionClient {
        CompletionClient::new(&CompletionConfig {
            api_key: "sk-test".to_string(),
            url,
            model: "gpt-3.5-turbo".to_string(),
        })
    }

    fn messages() -> Vec<PromptMessage> {
        vec![
            PromptMessage::new(Role::System, "be nice"),
            PromptMessage::new(Role::User, "hello"),
        ]
    }

    #[tokio::test]
    async fn test_returns_first_choice_and_sends_fixed_params() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: AxumHeaders, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer sk-test");
                assert_eq!(body["model"], "gpt-3.5-turbo");
                assert_eq!(body["max_tokens"], 150);
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "hello");
                Json(json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "Hi! Ask me anything."}},
                        {"message": {"role": "assistant", "content": "ignored"}}
                    ]
                }))
            }),
        );
        let url = serve(router).await;
        let reply = client(url).complete(messages()).await.unwrap();
        assert_eq!(reply, "Hi! Ask me anything.");
    }

    #[tokio::test]
    async fn test_empty_choices_fall_back() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let url = serve(router).await;
        let reply = client(url).complete(messages()).await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let url = serve(router).await;
        let err = client(url).complete(messages()).await.unwrap_err();
        match err {
            CompletionError::Status(status, body) => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client(format!("http://{addr}/v1/chat/completions"))
            .complete(messages())
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }
}

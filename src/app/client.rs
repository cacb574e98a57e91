use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    chat::{ChatReply, ChatRequest},
    contact::{ContactFormData, ContactSent},
    error::ErrorBody,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{} (Status {status})", body.error)]
    Api { status: u16, body: ErrorBody },
}

fn endpoint(path: &str) -> String {
    #[cfg(feature = "hydrate")]
    let origin = leptos::prelude::window().location().origin().unwrap_or_default();
    #[cfg(not(feature = "hydrate"))]
    let origin = String::new();
    format!("{origin}{path}")
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint(path))
        .json(body)
        .send()
        .await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| ErrorBody::new(text));
    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}

pub async fn send_contact(form: &ContactFormData) -> Result<ContactSent, ClientError> {
    post_json("/api/contact", form).await
}

pub async fn ask_chatbot(request: &ChatRequest) -> Result<String, ClientError> {
    let reply: ChatReply = post_json("/api/chatbot", request).await?;
    Ok(reply.reply)
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{error, info};

use crate::{
    chat::{
        completion::{ChatCompleter, CompletionClient},
        prompt, ChatReply, ChatRequest,
    },
    config::SiteConfig,
    contact::{
        mailer::{ContactEmail, Mailer, SmtpMailer},
        ContactFormData, ContactSent,
    },
    error::ApiError,
};

pub const CONTACT_PATH: &str = "/api/contact";
pub const CHATBOT_PATH: &str = "/api/chatbot";

/// Outbound services behind the API routes. A missing service makes its
/// route fail with a 500.
#[derive(Clone, Default)]
pub struct ApiState {
    pub completer: Option<Arc<dyn ChatCompleter>>,
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl ApiState {
    /// Builds the services the configuration allows. Also returns the SMTP
    /// mailer on its own so the caller can verify the connection.
    pub fn from_config(config: &SiteConfig) -> (Self, Option<Arc<SmtpMailer>>) {
        let completer = config
            .completion
            .as_ref()
            .map(|c| Arc::new(CompletionClient::new(c)) as Arc<dyn ChatCompleter>);
        let smtp = config
            .smtp
            .as_ref()
            .and_then(|c| match SmtpMailer::new(c) {
                Ok(mailer) => Some(Arc::new(mailer)),
                Err(err) => {
                    error!("contact route disabled, could not build the SMTP transport: {err}");
                    None
                }
            });
        let mailer = smtp.clone().map(|m| m as Arc<dyn Mailer>);
        (Self { completer, mailer }, smtp)
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(send_contact))
        .route(CHATBOT_PATH, post(chatbot))
        .with_state(state)
}

async fn send_contact(
    State(state): State<ApiState>,
    payload: Result<Json<ContactFormData>, JsonRejection>,
) -> Result<Json<ContactSent>, ApiError> {
    let Json(form) = payload?;
    form.validate().map_err(ApiError::Validation)?;
    let mailer = state
        .mailer
        .as_ref()
        .ok_or(ApiError::NotConfigured("Email transport"))?;

    let id = mailer.send(ContactEmail::from(&form)).await?;
    info!("contact message from {:?} sent as {id}", form.name.trim());
    Ok(Json(ContactSent {
        message: "Email sent successfully".to_string(),
        id,
    }))
}

async fn chatbot(
    State(state): State<ApiState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(ApiError::MissingMessage);
    }
    let completer = state
        .completer
        .as_ref()
        .ok_or(ApiError::NotConfigured("API key"))?;

    let reply = completer.complete(prompt::conversation(&request)).await?;
    Ok(Json(ChatReply { reply }))
}

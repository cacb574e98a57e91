use serde::{Deserialize, Serialize};

/// JSON error envelope returned by every API route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Fields(Vec<String>),
    Message(String),
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            code: None,
        }
    }
}

#[cfg(feature = "ssr")]
pub use server::ApiError;

#[cfg(feature = "ssr")]
mod server {
    use axum::{
        extract::rejection::JsonRejection,
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;
    use thiserror::Error;
    use tracing::{debug, error};

    use super::{ErrorBody, ErrorDetails};
    use crate::{
        chat::completion::CompletionError,
        contact::{mailer::MailError, FieldError},
    };

    #[derive(Error, Debug)]
    pub enum ApiError {
        #[error("Invalid request body")]
        BadBody(#[from] JsonRejection),
        #[error("Validation failed")]
        Validation(Vec<FieldError>),
        #[error("Message is required")]
        MissingMessage,
        #[error("{0} not configured")]
        NotConfigured(&'static str),
        #[error("Failed to get response from AI")]
        Upstream(StatusCode),
        #[error("Failed to send email")]
        Mail(#[from] MailError),
        #[error("Internal server error")]
        Internal(String),
    }

    impl From<CompletionError> for ApiError {
        fn from(err: CompletionError) -> Self {
            match err {
                CompletionError::Status(status, body) => {
                    error!("completion provider returned {status}: {body}");
                    Self::Upstream(status)
                }
                other => Self::Internal(other.to_string()),
            }
        }
    }

    impl ApiError {
        pub fn status(&self) -> StatusCode {
            match self {
                Self::BadBody(_) | Self::Validation(_) | Self::MissingMessage => {
                    StatusCode::BAD_REQUEST
                }
                Self::NotConfigured(_) | Self::Mail(_) | Self::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                // a provider status that isn't an error still can't be passed off as success
                Self::Upstream(status) if status.is_client_error() || status.is_server_error() => {
                    *status
                }
                Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            }
        }

        pub fn body(&self) -> ErrorBody {
            let mut body = ErrorBody::new(self.to_string());
            match self {
                Self::BadBody(rejection) => {
                    body.details = Some(ErrorDetails::Message(rejection.body_text()));
                }
                Self::Validation(errors) => {
                    body.details = Some(ErrorDetails::Fields(
                        errors.iter().map(ToString::to_string).collect(),
                    ));
                }
                Self::Mail(err) => {
                    body.details = Some(ErrorDetails::Message(err.to_string()));
                    body.code = err.code();
                }
                _ => {}
            }
            body
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            let status = self.status();
            if status.is_server_error() {
                match &self {
                    Self::Internal(cause) => error!("{self}: {cause}"),
                    Self::Mail(cause) => error!("{self}: {cause}"),
                    _ => error!("{self}"),
                }
            } else {
                debug!("rejected request: {self}");
            }
            (status, Json(self.body())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_skips_empty_fields() {
        let json = serde_json::to_string(&ErrorBody::new("Message is required")).unwrap();
        assert_eq!(json, r#"{"error":"Message is required"}"#);
    }

    #[test]
    fn test_details_round_trip_both_shapes() {
        let fields: ErrorBody =
            serde_json::from_str(r#"{"error":"Validation failed","details":["a","b"]}"#).unwrap();
        assert_eq!(
            fields.details,
            Some(ErrorDetails::Fields(vec!["a".to_string(), "b".to_string()]))
        );
        let message: ErrorBody = serde_json::from_str(
            r#"{"error":"Failed to send email","details":"boom","code":"535"}"#,
        )
        .unwrap();
        assert_eq!(message.details, Some(ErrorDetails::Message("boom".to_string())));
        assert_eq!(message.code.as_deref(), Some("535"));
    }
}

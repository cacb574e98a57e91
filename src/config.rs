use std::env;

use thiserror::Error;
use tracing::warn;

use crate::content::OWNER_EMAIL;

pub const DEFAULT_COMPLETION_URL: &str = "https://api.chatanywhere.tech/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    pub api_key: String,
    pub url: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub recipient: String,
}

/// Secrets and endpoints for the two API routes. A `None` section means the
/// route answers 500 until it is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub completion: Option<CompletionConfig>,
    pub smtp: Option<SmtpConfig>,
}

impl SiteConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let completion = match get("CHATANYWHERE_API_KEY") {
            Some(api_key) => Some(CompletionConfig {
                api_key,
                url: get("COMPLETION_API_URL").unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
                model: get("COMPLETION_MODEL")
                    .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            }),
            None => {
                warn!("CHATANYWHERE_API_KEY is not set, /api/chatbot is disabled");
                None
            }
        };

        let smtp = match (get("EMAIL_USER"), get("EMAIL_PASS")) {
            (Some(user), Some(password)) => {
                let port = match get("SMTP_PORT") {
                    Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                        name: "SMTP_PORT",
                        value,
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };
                Some(SmtpConfig {
                    host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                    port,
                    user,
                    password,
                    recipient: get("CONTACT_RECIPIENT").unwrap_or_else(|| OWNER_EMAIL.to_string()),
                })
            }
            _ => {
                warn!("EMAIL_USER/EMAIL_PASS are not set, /api/contact is disabled");
                None
            }
        };

        Ok(Self { completion, smtp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_disables_both_routes() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_defaults_fill_in() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CHATANYWHERE_API_KEY", "sk-test"),
            ("EMAIL_USER", "site@example.com"),
            ("EMAIL_PASS", "secret"),
        ]))
        .unwrap();
        let completion = config.completion.unwrap();
        assert_eq!(completion.url, DEFAULT_COMPLETION_URL);
        assert_eq!(completion.model, DEFAULT_COMPLETION_MODEL);
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.host, DEFAULT_SMTP_HOST);
        assert_eq!(smtp.port, 465);
        assert_eq!(smtp.recipient, OWNER_EMAIL);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("CHATANYWHERE_API_KEY", "  "),
            ("EMAIL_USER", "site@example.com"),
        ]))
        .unwrap();
        assert!(config.completion.is_none());
        assert!(config.smtp.is_none());
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[
            ("EMAIL_USER", "site@example.com"),
            ("EMAIL_PASS", "secret"),
            ("SMTP_PORT", "smtp"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                name: "SMTP_PORT",
                value: "smtp".to_string()
            }
        );
    }
}

use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use super::ContactFormData;
use crate::config::SmtpConfig;

const SENDER_NAME: &str = "Portfolio Contact Form";
/// SMTPS. Every other port is dialed in plain text and upgraded with STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] AddressError),
    #[error("Couldn't build email: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl MailError {
    /// SMTP reply code, when the server sent one.
    pub fn code(&self) -> Option<String> {
        match self {
            Self::Smtp(e) => e.status().map(|code| code.to_string()),
            _ => None,
        }
    }
}

/// A contact submission rendered as an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
    /// Visitor address, used as Reply-To.
    pub reply_to: String,
    pub reply_name: String,
}

impl From<&ContactFormData> for ContactEmail {
    fn from(form: &ContactFormData) -> Self {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();
        let html = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n",
            escape_html(name),
            escape_html(email),
            escape_html(message).replace('\n', "<br>"),
        );
        let text = format!(
            "New Contact Form Submission\n\nName: {name}\nEmail: {email}\nMessage:\n{message}\n"
        );
        Self {
            subject: format!("Portfolio Contact Form - Message from {name}"),
            text,
            html,
            reply_to: email.to_string(),
            reply_name: name.to_string(),
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Delivers contact emails. Returns the Message-ID of the sent email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: ContactEmail) -> Result<String, MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let builder = if uses_implicit_tls(config.port) {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();
        let from = Mailbox::new(Some(SENDER_NAME.to_string()), config.user.parse()?);
        let to = Mailbox::new(None, config.recipient.parse()?);
        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Checks that the SMTP server accepts our connection and credentials.
    pub async fn verify(&self) -> Result<bool, MailError> {
        Ok(self.transport.test_connection().await?)
    }

    fn build_message(&self, email: ContactEmail) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject)
            .message_id(None);
        // the form's email check is looser than RFC 5322, so skip Reply-To rather than fail
        match email.reply_to.parse::<Address>() {
            Ok(addr) => builder = builder.reply_to(Mailbox::new(Some(email.reply_name), addr)),
            Err(e) => tracing::debug!("not setting reply-to for {:?}: {e}", email.reply_to),
        }
        Ok(builder.multipart(MultiPart::alternative_plain_html(email.text, email.html))?)
    }
}

fn uses_implicit_tls(port: u16) -> bool {
    port == IMPLICIT_TLS_PORT
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: ContactEmail) -> Result<String, MailError> {
        let message = self.build_message(email)?;
        let id = message
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();
        let response = self.transport.send(message).await?;
        tracing::debug!("SMTP accepted message {id}: {:?}", response.code());
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            user: "site@example.com".to_string(),
            password: "secret".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    fn form() -> ContactFormData {
        ContactFormData {
            name: " Ada <Lovelace> ".to_string(),
            email: "ada@example.com".to_string(),
            message: "Line one\nLine two & more".to_string(),
        }
    }

    #[test]
    fn test_contact_email_contents() {
        let email = ContactEmail::from(&form());
        assert_eq!(
            email.subject,
            "Portfolio Contact Form - Message from Ada <Lovelace>"
        );
        assert!(email.html.contains("Ada &lt;Lovelace&gt;"));
        assert!(email.html.contains("Line one<br>Line two &amp; more"));
        assert!(email.text.contains("Email: ada@example.com"));
        assert!(email.text.contains("Line one\nLine two & more"));
        assert_eq!(email.reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_build_message_headers() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let message = mailer.build_message(ContactEmail::from(&form())).unwrap();
        let headers = message.headers();
        assert!(headers.get_raw("Message-ID").is_some());
        assert!(headers
            .get_raw("From")
            .unwrap()
            .contains("site@example.com"));
        assert!(headers.get_raw("To").unwrap().contains("owner@example.com"));
        assert!(headers
            .get_raw("Reply-To")
            .unwrap()
            .contains("ada@example.com"));
    }

    #[tokio::test]
    async fn test_unparsable_reply_to_is_skipped() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let mut email = ContactEmail::from(&form());
        email.reply_to = "weird@@example.com".to_string();
        let message = mailer.build_message(email).unwrap();
        assert!(message.headers().get_raw("Reply-To").is_none());
    }

    #[tokio::test]
    async fn test_submission_port_uses_starttls() {
        assert!(uses_implicit_tls(465));
        assert!(!uses_implicit_tls(587));
        assert!(!uses_implicit_tls(25));

        let mut config = config();
        config.port = 587;
        let mailer = SmtpMailer::new(&config).unwrap();
        assert!(mailer.build_message(ContactEmail::from(&form())).is_ok());
    }

    #[tokio::test]
    async fn test_bad_sender_address_is_rejected() {
        let mut config = config();
        config.user = "not-an-address".to_string();
        assert!(matches!(SmtpMailer::new(&config), Err(MailError::Address(_))));
    }
}

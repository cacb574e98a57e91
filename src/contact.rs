#[cfg(feature = "ssr")]
pub mod mailer;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

/// Body of `POST /api/contact`. Missing fields deserialize as empty strings
/// so they surface as validation errors rather than decode errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least {} characters long", MIN_NAME_LEN)]
    NameTooShort,
    #[error("Please provide a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {} characters long", MIN_MESSAGE_LEN)]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::NameTooShort => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MessageTooShort => ContactField::Message,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactFormData {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Inline message for one field, friendlier when the field is blank.
    pub fn field_message(&self, error: FieldError) -> String {
        let blank = self.value(error.field()).trim().is_empty();
        match (error.field(), blank) {
            (ContactField::Name, true) => "Please enter your name".to_string(),
            (ContactField::Email, true) => "Please enter your email".to_string(),
            (ContactField::Message, true) => "Please enter your message".to_string(),
            _ => error.to_string(),
        }
    }
}

/// Successful `POST /api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSent {
    pub message: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(
            form("Ada", "ada@example.com", "Hello there!").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        let errors = form("  A  ", "ada@example.com", "Hello there!")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::NameTooShort]);
        assert!(errors[0].to_string().contains("Name"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_message_length_boundary() {
        let nine = form("Ada", "ada@example.com", "123456789");
        assert_eq!(nine.validate(), Err(vec![FieldError::MessageTooShort]));
        let ten = form("Ada", "ada@example.com", "1234567890");
        assert_eq!(ten.validate(), Ok(()));
        let padded = form("Ada", "ada@example.com", "   123456789   ");
        assert!(padded.validate().is_err());
    }

    #[test]
    fn test_all_errors_in_form_order() {
        let errors = ContactFormData::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::NameTooShort,
                FieldError::InvalidEmail,
                FieldError::MessageTooShort
            ]
        );
    }

    #[test]
    fn test_field_messages() {
        let empty = ContactFormData::default();
        assert_eq!(
            empty.field_message(FieldError::NameTooShort),
            "Please enter your name"
        );
        let bad = form("Ada", "nope", "short");
        assert_eq!(
            bad.field_message(FieldError::InvalidEmail),
            "Please provide a valid email address"
        );
        assert_eq!(
            bad.field_message(FieldError::MessageTooShort),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let data: ContactFormData = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(data.email, "");
        assert_eq!(data.message, "");
    }
}

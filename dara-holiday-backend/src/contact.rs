use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::form::CsrfToken;

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContactPayload {
    #[serde(skip_serializing)]
    pub csrf_token: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl CsrfToken for ContactPayload {
    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Translation key of the problem with each field, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

const REQUIRED: &str = "contacts.required";
const INVALID_EMAIL: &str = "contacts.invalid_email";

impl ContactPayload {
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        let errors = FieldErrors {
            name: name.is_empty().then_some(REQUIRED),
            email: if email.is_empty() {
                Some(REQUIRED)
            } else if !email.contains('@') {
                Some(INVALID_EMAIL)
            } else {
                None
            },
            message: message.is_empty().then_some(REQUIRED),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            message: message.to_owned(),
        })
    }
}

/// Hands accepted contact requests to whoever answers them.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), AppError>;
}

/// Writes contact requests to the log.
pub struct LogContactSink;

impl ContactSink for LogContactSink {
    fn deliver(&self, message: &ContactMessage) -> Result<(), AppError> {
        info!(
            name = %message.name,
            email = %message.email,
            phone = message.phone.as_deref().unwrap_or("-"),
            "contact request: {}",
            message.message
        );
        Ok(())
    }
}

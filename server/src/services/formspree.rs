//! Formspree relay client.
//!
//! Thin HTTP wrapper that posts one JSON submission to the configured form
//! endpoint. Each submission is tagged with its `form_type` and an email
//! `_subject` line so both forms can share one Formspree inbox.
//!
//! ERROR HANDLING
//! ==============
//! Any 2xx counts as delivered. Transport failures and non-2xx statuses are
//! returned as `RelayError`; nothing is retried.

use serde_json::{Map, Value};

use crate::config::FormspreeConfig;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    /// The request never produced a response (connect failure, timeout).
    #[error("form relay request failed: {0}")]
    Request(String),
    /// Formspree answered with a non-success status.
    #[error("form relay rejected: status {status}")]
    Rejected { status: u16, body: String },
}

// =============================================================================
// FORM TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    Contact,
    Waitlist,
}

impl FormType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact Form",
            Self::Waitlist => "AI Waitlist",
        }
    }

    /// Email subject for a submission from `name`.
    #[must_use]
    pub fn subject(self, name: &str) -> String {
        match self {
            Self::Contact => format!("New Contact Form Submission from {name}"),
            Self::Waitlist => format!("New AI Waitlist Signup from {name}"),
        }
    }
}

/// Add the `form_type` tag and `_subject` line to a submission's fields.
#[must_use]
pub fn envelope(form_type: FormType, name: &str, mut fields: Map<String, Value>) -> Value {
    fields.insert("form_type".to_owned(), Value::String(form_type.label().to_owned()));
    fields.insert("_subject".to_owned(), Value::String(form_type.subject(name)));
    Value::Object(fields)
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct FormspreeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FormspreeClient {
    /// # Errors
    ///
    /// Returns `RelayError::HttpClientBuild` if the HTTP client cannot be built.
    pub fn new(config: &FormspreeConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request)
            .connect_timeout(config.timeouts.connect)
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `payload` to the form endpoint.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Request` when no response arrives and
    /// `RelayError::Rejected` for a non-2xx response.
    pub async fn submit(&self, payload: &Value) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status: status.as_u16(), body })
    }
}

#[cfg(test)]
#[path = "formspree_test.rs"]
mod tests;

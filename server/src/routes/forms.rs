//! Form relay routes: `POST /api/contact` and `POST /api/ai-waitlist`.
//!
//! Each handler rate-limits by client IP, validates the submission, and
//! forwards it to Formspree. Responses always carry `{success, message}`.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rate_limit::RateLimitError;
use crate::services::formspree::{FormType, RelayError, envelope};
use crate::state::AppState;

const CONTACT_RECEIVED: &str = "Thanks! We'll contact you soon.";
const WAITLIST_JOINED: &str = "Welcome to the waitlist!";
const RELAY_FAILED: &str = "We couldn't deliver your submission. Please try again later.";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(rename = "projectType", alias = "project_type")]
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WaitlistSubmission {
    pub name: String,
    pub email: String,
    pub interests: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("email is not a valid address")]
    InvalidEmail,
    #[error("request body must be a JSON object")]
    MalformedBody,
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    optional(field, value, max)
}

fn optional(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
fn valid_email(raw: &str) -> bool {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    required("email", value, 254)?;
    if valid_email(value) { Ok(()) } else { Err(ValidationError::InvalidEmail) }
}

impl ContactSubmission {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, 100)?;
        check_email(&self.email)?;
        optional("company", &self.company, 100)?;
        optional("projectType", &self.project_type, 50)?;
        optional("budget", &self.budget, 50)?;
        required("message", &self.message, 2000)
    }

    fn to_payload(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("name".to_owned(), self.name.trim().into());
        fields.insert("email".to_owned(), self.email.trim().into());
        fields.insert("company".to_owned(), self.company.trim().into());
        fields.insert("project_type".to_owned(), self.project_type.trim().into());
        fields.insert("budget".to_owned(), self.budget.trim().into());
        fields.insert("message".to_owned(), self.message.trim().into());
        envelope(FormType::Contact, self.name.trim(), fields)
    }
}

impl WaitlistSubmission {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, 100)?;
        check_email(&self.email)?;
        optional("interests", &self.interests, 500)
    }

    fn to_payload(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("name".to_owned(), self.name.trim().into());
        fields.insert("email".to_owned(), self.email.trim().into());
        fields.insert("interests".to_owned(), self.interests.trim().into());
        envelope(FormType::Waitlist, self.name.trim(), fields)
    }
}

// =============================================================================
// STATUS MAPPING
// =============================================================================

pub(crate) fn validation_error_to_status(_err: &ValidationError) -> StatusCode {
    StatusCode::UNPROCESSABLE_ENTITY
}

pub(crate) fn rate_limit_error_to_status(err: &RateLimitError) -> StatusCode {
    match err {
        RateLimitError::PerClientExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
    }
}

pub(crate) fn relay_error_to_status(err: &RelayError) -> StatusCode {
    match err {
        RelayError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RelayError::Request(_) | RelayError::Rejected { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn reply(status: StatusCode, success: bool, message: impl Into<String>) -> Response {
    (status, Json(SubmissionResponse { success, message: message.into() })).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Client address for rate limiting: first `x-forwarded-for` entry, then
/// `x-real-ip`, then `"unknown"`.
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };
    if let Some(forwarded) = header("x-forwarded-for") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
            return first.to_owned();
        }
    }
    header("x-real-ip").unwrap_or("unknown").to_owned()
}

/// Unreadable bodies (bad JSON, wrong content type) become a validation
/// failure so they still pass through the rate limiter and get the usual
/// response shape.
fn read_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(form)| form).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "form body rejected");
        ValidationError::MalformedBody
    })
}

/// `POST /api/contact`.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let ip = client_ip(&headers);
    let payload = read_body(body).and_then(|form| form.validate().map(|()| form.to_payload()));
    relay(&state, &ip, payload, CONTACT_RECEIVED).await
}

/// `POST /api/ai-waitlist`.
pub async fn submit_waitlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<WaitlistSubmission>, JsonRejection>,
) -> Response {
    let ip = client_ip(&headers);
    let payload = read_body(body).and_then(|form| form.validate().map(|()| form.to_payload()));
    relay(&state, &ip, payload, WAITLIST_JOINED).await
}

async fn relay(
    state: &AppState,
    ip: &str,
    payload: Result<Value, ValidationError>,
    success_message: &str,
) -> Response {
    if let Err(e) = state.rate_limiter.check_and_record(ip) {
        tracing::warn!(%ip, error = %e, "form relay rate limited");
        return reply(rate_limit_error_to_status(&e), false, e.to_string());
    }

    let payload = match payload {
        Ok(payload) => payload,
        Err(e) => {
            tracing::info!(%ip, error = %e, "form submission rejected");
            return reply(validation_error_to_status(&e), false, e.to_string());
        }
    };

    match state.relay.submit(&payload).await {
        Ok(()) => {
            tracing::info!(%ip, form_type = ?payload.get("form_type"), "form submission relayed");
            reply(StatusCode::OK, true, success_message)
        }
        Err(e) => {
            tracing::error!(%ip, endpoint = state.relay.endpoint(), error = %e, "form relay failed");
            reply(relay_error_to_status(&e), false, RELAY_FAILED)
        }
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;

//! Form submission client.
//!
//! Client-side (hydrate): a single JSON `POST` via `gloo-net`.
//! Server-side (SSR): a stub that reports `Unavailable`, since forms are only
//! submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failure and HTTP status are interpreted. The response body
//! is ignored, and nothing is retried: one call is one attempt.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde_json::Value;

/// Failure modes of a form post.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("form request failed: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("form endpoint responded with status {0}")]
    Status(u16),
    /// Called outside the browser.
    #[error("form submission is not available on the server")]
    Unavailable,
}

/// Map an HTTP status to the submission outcome: any 2xx is success.
///
/// # Errors
///
/// Returns `SubmitError::Status` for every non-2xx status.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Status(status)) }
}

/// `POST` a JSON body to `endpoint` with `Content-Type: application/json`.
///
/// # Errors
///
/// Returns `SubmitError::Network` when the request cannot be built or sent,
/// and `SubmitError::Status` when the endpoint rejects it.
pub async fn post_json(endpoint: &str, body: &Value) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(SubmitError::Unavailable)
    }
}

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the Formspree relay client and the per-client rate limiter; both
//! are cheap to clone and shared across requests.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::services::formspree::FormspreeClient;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<FormspreeClient>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(relay: FormspreeClient, rate_limiter: RateLimiter) -> Self {
        Self { relay: Arc::new(relay), rate_limiter }
    }
}

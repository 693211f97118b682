//! In-memory rate limiting for the form relays.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by client IP. A request is admitted only while the client has fewer
//! than `limit` recorded requests inside the window.
//!
//! TRADE-OFFS
//! ==========
//! State is per process and lost on restart. Clients behind one proxy that
//! does not forward their address share the `"unknown"` bucket.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::RelayRateLimit;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    config: RelayRateLimit,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RelayRateLimit) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), config }
    }

    /// Check the client's window, then record the request.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitError::PerClientExceeded` when the client is over its
    /// limit; the rejected request is not recorded.
    pub fn check_and_record(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        // Drop clients whose whole window has expired so the map stays bounded.
        inner.retain(|_, deque| {
            prune_window(deque, now, cfg.window);
            !deque.is_empty()
        });

        let deque = inner.entry(client.to_owned()).or_default();
        if deque.len() >= cfg.limit {
            return Err(RateLimitError::PerClientExceeded { limit: cfg.limit, window_secs: cfg.window.as_secs() });
        }
        deque.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;

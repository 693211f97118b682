//! Server configuration parsed from environment variables.
//!
//! Every setting has a default, so an empty environment yields a working
//! server. Values that are present but unusable are rejected instead of
//! silently falling back.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FORMSPREE_ENDPOINT: &str = "https://formspree.io/f/mvgrekqd";
pub const DEFAULT_FORMSPREE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FORMSPREE_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_RELAY_RATE_LIMIT: usize = 5;
pub const DEFAULT_RELAY_RATE_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The variable is set but does not parse as the expected type.
    #[error("{var}: cannot parse {value:?}")]
    Parse { var: &'static str, value: String },
    /// The variable parses but is outside the accepted range.
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormspreeConfig {
    pub endpoint: String,
    pub timeouts: RelayTimeouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayRateLimit {
    pub limit: usize,
    pub window: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub formspree: FormspreeConfig,
    pub rate_limit: RelayRateLimit,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FORMSPREE_ENDPOINT`: default `https://formspree.io/f/mvgrekqd`
    /// - `FORMSPREE_TIMEOUT_SECS`: default 10
    /// - `FORMSPREE_CONNECT_TIMEOUT_SECS`: default 5
    /// - `RELAY_RATE_LIMIT`: requests per client per window, default 5
    /// - `RELAY_RATE_WINDOW_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        if port == 0 {
            return Err(ConfigError::Invalid { var: "PORT", reason: "must be non-zero" });
        }

        let endpoint = lookup("FORMSPREE_ENDPOINT")
            .map(|raw| raw.trim().to_owned())
            .unwrap_or_else(|| DEFAULT_FORMSPREE_ENDPOINT.to_owned());
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid { var: "FORMSPREE_ENDPOINT", reason: "must be an http(s) URL" });
        }

        let timeouts = RelayTimeouts {
            request: Duration::from_secs(positive(&lookup, "FORMSPREE_TIMEOUT_SECS", DEFAULT_FORMSPREE_TIMEOUT_SECS)?),
            connect: Duration::from_secs(positive(
                &lookup,
                "FORMSPREE_CONNECT_TIMEOUT_SECS",
                DEFAULT_FORMSPREE_CONNECT_TIMEOUT_SECS,
            )?),
        };

        let limit = parse_or(&lookup, "RELAY_RATE_LIMIT", DEFAULT_RELAY_RATE_LIMIT)?;
        if limit == 0 {
            return Err(ConfigError::Invalid { var: "RELAY_RATE_LIMIT", reason: "must be non-zero" });
        }
        let rate_limit = RelayRateLimit {
            limit,
            window: Duration::from_secs(positive(&lookup, "RELAY_RATE_WINDOW_SECS", DEFAULT_RELAY_RATE_WINDOW_SECS)?),
        };

        Ok(Self { port, formspree: FormspreeConfig { endpoint, timeouts }, rate_limit })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    let secs = parse_or(lookup, var, default)?;
    if secs == 0 {
        return Err(ConfigError::Invalid { var, reason: "must be at least one second" });
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

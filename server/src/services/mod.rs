//! Outbound integrations used by route handlers.

pub mod formspree;

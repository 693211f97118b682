//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser checks live here so pages and components stay renderable on the
//! server without sprinkling feature gates through view code.

pub mod browser;

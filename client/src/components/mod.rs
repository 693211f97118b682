//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the shared form pieces, reading
//! connectivity and navigation status from the `SiteStatus` context signal.

pub mod floating_hire_button;
pub mod footer;
pub mod header;
pub mod lead_form;
pub mod loading_screen;
pub mod network_guard;
pub mod offline_screen;
pub mod route_change_loader;
pub mod scene;
pub mod success_popup;

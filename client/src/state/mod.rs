//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `site` is the app-wide connectivity/transition controller provided through
//! context; `forms` is page-local state owned by the two form pages.

pub mod forms;
pub mod site;

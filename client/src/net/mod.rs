//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site's only outbound traffic is the two lead forms; `forms` posts them
//! to the external form endpoint.

pub mod forms;

//! Fixed route table for the site.
//!
//! DESIGN
//! ======
//! Every page is one variant of `SiteRoute`. Navigation chrome, the loading
//! screen label and the router all read paths and page views from here;
//! `segment` must stay equal to `path` minus its leading slash.

use leptos::prelude::*;

use crate::pages::{
    about::AboutPage, ai_waitlist::AiWaitlistPage, contact::ContactPage, home::HomePage, portfolio::PortfolioPage,
    services::ServicesPage,
};

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// One of the six top-level pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Services,
    Portfolio,
    About,
    Contact,
    AiWaitlist,
}

impl SiteRoute {
    /// Routes in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Services,
        Self::Portfolio,
        Self::About,
        Self::Contact,
        Self::AiWaitlist,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::Portfolio => "/portfolio",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::AiWaitlist => "/ai-waitlist",
        }
    }

    /// Router segment: the path without its leading slash.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::About => "about",
            Self::Contact => "contact",
            Self::AiWaitlist => "ai-waitlist",
        }
    }

    /// Page component rendered for this route.
    pub fn view(self) -> AnyView {
        match self {
            Self::Home => view! { <HomePage/> }.into_any(),
            Self::Services => view! { <ServicesPage/> }.into_any(),
            Self::Portfolio => view! { <PortfolioPage/> }.into_any(),
            Self::About => view! { <AboutPage/> }.into_any(),
            Self::Contact => view! { <ContactPage/> }.into_any(),
            Self::AiWaitlist => view! { <AiWaitlistPage/> }.into_any(),
        }
    }

    /// Label shown in the header and footer navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::AiWaitlist => "CashCue AI",
        }
    }

    /// Resolve a browser pathname. A single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// Page key used to label the loading placeholder: the path without its
/// leading slash, or `home` for the root.
#[must_use]
pub fn page_key(path: &str) -> &str {
    let key = path.strip_prefix('/').unwrap_or(path);
    if key.is_empty() { "home" } else { key }
}

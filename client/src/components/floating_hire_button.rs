//! Floating "Hire Us" call to action pinned to the viewport corner.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::SiteRoute;

#[cfg(test)]
#[path = "floating_hire_button_test.rs"]
mod floating_hire_button_test;

/// The button is redundant on the contact page itself.
fn visible_on(path: &str) -> bool {
    SiteRoute::from_path(path) != Some(SiteRoute::Contact)
}

#[component]
pub fn FloatingHireButton() -> impl IntoView {
    let location = use_location();

    view! {
        <Show when=move || location.pathname.with(|path| visible_on(path))>
            <a class="floating-hire" href=SiteRoute::Contact.path() title="Start a project">
                <span class="floating-hire__icon">"💬"</span>
                <span class="floating-hire__label">"Hire Us"</span>
            </a>
        </Show>
    }
}

//! Sticky site header with primary navigation.
//!
//! The mobile menu is local state and closes whenever the path changes, so a
//! tap on a nav link never leaves it open over the next page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::catalog;
use crate::routes::SiteRoute;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

fn is_active(route: SiteRoute, path: &str) -> bool {
    SiteRoute::from_path(path) == Some(route)
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let nav_links = move |class: &'static str| {
        SiteRoute::ALL
            .into_iter()
            .map(|route| {
                view! {
                    <a
                        href=route.path()
                        class=class
                        class:nav-link--active=move || pathname.with(|path| is_active(route, path))
                    >
                        {route.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href=SiteRoute::Home.path() class="site-header__logo">
                    <span class="site-header__logo-mark">"C"</span>
                    <span class="site-header__logo-text">{catalog().company.name}</span>
                </a>
                <nav class="site-header__nav">{nav_links("nav-link")}</nav>
                <a href=SiteRoute::Contact.path() class="btn btn--primary site-header__cta">
                    "Get Started"
                </a>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="site-header__mobile-nav">{nav_links("nav-link nav-link--mobile")}</nav>
            </Show>
        </header>
    }
}

//! Site footer: brand blurb, contact links and quick navigation.

use leptos::prelude::*;

use crate::content::{catalog, whatsapp_link};
use crate::routes::SiteRoute;
use crate::util::browser::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let company = &catalog().company;
    let mailto = format!("mailto:{}", company.contact.email);
    let whatsapp = whatsapp_link(company.contact.whatsapp);

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <h3>{company.name}</h3>
                    <p>{company.description}</p>
                </div>
                <div class="site-footer__contact">
                    <h4>"Get in Touch"</h4>
                    <a href=mailto>{company.contact.email}</a>
                    <a href=whatsapp target="_blank" rel="noopener noreferrer">
                        {company.contact.whatsapp}
                    </a>
                </div>
                <div class="site-footer__links">
                    <h4>"Quick Links"</h4>
                    {SiteRoute::ALL
                        .into_iter()
                        .map(|route| view! { <a href=route.path()>{route.label()}</a> })
                        .collect_view()}
                </div>
            </div>
            <p class="site-footer__copyright">
                {format!("© {} {}. All rights reserved.", current_year(), company.name)}
            </p>
        </footer>
    }
}

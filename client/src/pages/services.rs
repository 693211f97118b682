//! Services overview: catalog services, additional expertise and process.

use leptos::prelude::*;

use crate::content::{ADDITIONAL_EXPERTISE, PROCESS_STEPS, SERVICE_ICONS, catalog};
use crate::routes::SiteRoute;

fn feature_items(features: &'static [&'static str]) -> impl IntoView {
    features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = catalog().services;

    view! {
        <div class="page page--services">
            <section class="section">
                <div class="section__header">
                    <h1 class="display-huge">"Our Services"</h1>
                    <p class="body-large">
                        "We offer a comprehensive range of web development services designed to bring your vision to life with cutting-edge technology and stunning design."
                    </p>
                </div>

                <div class="card-grid card-grid--two">
                    {services
                        .iter()
                        .zip(SERVICE_ICONS)
                        .map(|(service, icon)| {
                            view! {
                                <div class="card card--wide">
                                    <div class="card__icon">{icon}</div>
                                    <div>
                                        <h3 class="heading-2">{service.title}</h3>
                                        <p class="body-medium">{service.description}</p>
                                        <ul class="feature-list feature-list--columns">
                                            {feature_items(service.features)}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="display-medium section__title">"Additional Expertise"</h2>
                <div class="card-grid card-grid--four">
                    {ADDITIONAL_EXPERTISE
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="card card--centered">
                                    <div class="card__icon">{item.icon}</div>
                                    <h3 class="heading-3">{item.title}</h3>
                                    <p class="body-small">{item.description}</p>
                                    <ul class="feature-list">{feature_items(item.features)}</ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--boxed">
                <h2 class="display-medium section__title">"Our Process"</h2>
                <div class="process">
                    {PROCESS_STEPS
                        .iter()
                        .map(|(step, title, description)| {
                            view! {
                                <div class="process__step">
                                    <div class="process__number">{*step}</div>
                                    <h3 class="heading-3">{*title}</h3>
                                    <p class="body-small">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--cta">
                <h2 class="display-medium">"Ready to Start Your Project?"</h2>
                <p class="body-large">
                    "Let's discuss your project requirements and create something amazing together."
                </p>
                <div class="hero__actions">
                    <a href=SiteRoute::Contact.path() class="btn btn--primary">"Get a Quote →"</a>
                    <a href=SiteRoute::Portfolio.path() class="btn btn--secondary">"View Our Work"</a>
                </div>
            </section>
        </div>
    }
}

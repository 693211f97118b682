//! Landing page: hero scene, service preview, testimonials and a closing CTA.

use leptos::prelude::*;

use crate::components::scene::{HERO_SCENE, Scene};
use crate::content::{SERVICE_ICONS, catalog};
use crate::routes::SiteRoute;
use crate::util::browser::scroll_to;

/// Anchor of the closing call-to-action section.
const CONTACT_SECTION_ID: &str = "contact-section";

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = catalog();
    let company = &catalog.company;

    view! {
        <div class="page page--home">
            <section class="hero">
                <div class="hero__copy">
                    <h1 class="display-huge">{company.tagline}</h1>
                    <p class="body-large">{company.description}</p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=move |_| scroll_to(CONTACT_SECTION_ID)>
                            "Start Your Project →"
                        </button>
                        <a href=SiteRoute::Portfolio.path() class="btn btn--secondary">
                            "View Our Work"
                        </a>
                    </div>
                </div>
                <div class="hero__scene">
                    <Scene scene=HERO_SCENE/>
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="display-medium">"What We Create"</h2>
                    <p class="body-large">
                        "We specialize in building cutting-edge digital experiences that push the boundaries of what's possible on the web."
                    </p>
                </div>
                <div class="card-grid card-grid--four">
                    {catalog
                        .services
                        .iter()
                        .zip(SERVICE_ICONS)
                        .map(|(service, icon)| {
                            view! {
                                <div class="card">
                                    <div class="card__icon">{icon}</div>
                                    <h3 class="heading-3">{service.title}</h3>
                                    <p class="body-small">{service.description}</p>
                                    <ul class="feature-list">
                                        {service
                                            .features
                                            .iter()
                                            .take(2)
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__footer">
                    <a href=SiteRoute::Services.path() class="btn btn--primary">
                        "Explore All Services →"
                    </a>
                </div>
            </section>

            <section class="section section--tinted">
                <div class="section__header">
                    <h2 class="display-medium">"What Our Clients Say"</h2>
                    <p class="body-large">
                        "Don't just take our word for it. See what our clients think about working with CashCue."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {catalog
                        .testimonials
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <div class="card testimonial">
                                    <div class="testimonial__rating">
                                        {"★".repeat(usize::from(testimonial.rating))}
                                    </div>
                                    <p class="body-medium">{format!("\"{}\"", testimonial.content)}</p>
                                    <p class="heading-3">{testimonial.name}</p>
                                    <p class="body-small">
                                        {format!("{} at {}", testimonial.role, testimonial.company)}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id=CONTACT_SECTION_ID class="section section--cta">
                <h2 class="display-medium">"Ready to Build Something Amazing?"</h2>
                <p class="body-large">
                    "Let's create a futuristic website that sets your business apart from the competition."
                </p>
                <div class="hero__actions">
                    <a href=SiteRoute::Contact.path() class="btn btn--primary">
                        "Get Started Today →"
                    </a>
                    <a href=SiteRoute::Portfolio.path() class="btn btn--secondary">
                        "View Our Portfolio"
                    </a>
                </div>
            </section>
        </div>
    }
}

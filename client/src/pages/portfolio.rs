//! Portfolio grid with a single-select category filter.

use leptos::prelude::*;

use crate::content::{ALL_CATEGORIES, PORTFOLIO_CATEGORIES, Stat, catalog};
use crate::pages::stat_grid;
use crate::routes::SiteRoute;

const PORTFOLIO_STATS: [Stat; 4] = [
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "100%", label: "Client Satisfaction" },
    Stat { value: "24/7", label: "Support Available" },
    Stat { value: "3+", label: "Years Experience" },
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let selected = RwSignal::new(ALL_CATEGORIES);

    let projects = move || {
        catalog()
            .projects_in(selected.get())
            .into_iter()
            .map(|project| {
                view! {
                    <div class="card project">
                        <div class="project__media">
                            <img src=project.image alt=project.title loading="lazy"/>
                            <span class="project__badge">{project.category}</span>
                        </div>
                        <div class="project__body">
                            <h3 class="heading-3">{project.title}</h3>
                            <p class="body-small">{project.description}</p>
                            <div class="tag-list">
                                {project.tech.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect_view()}
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page page--portfolio">
            <section class="section">
                <div class="section__header">
                    <h1 class="display-huge">"Our Portfolio"</h1>
                    <p class="body-large">
                        "Explore our collection of stunning websites and digital experiences that showcase our expertise in modern web development and design."
                    </p>
                </div>

                <div class="filter-bar">
                    {PORTFOLIO_CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class="filter-bar__button"
                                    class:filter-bar__button--active=move || selected.get() == category
                                    on:click=move |_| selected.set(category)
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card-grid card-grid--three">{projects}</div>
            </section>

            <section class="section section--boxed">
                {stat_grid(&PORTFOLIO_STATS)}
            </section>

            <section class="section section--cta">
                <h2 class="display-medium">"Ready to Join Our Portfolio?"</h2>
                <p class="body-large">
                    "Let's create something amazing together. Your project could be our next featured work."
                </p>
                <div class="hero__actions">
                    <a href=SiteRoute::Contact.path() class="btn btn--primary">"Start Your Project →"</a>
                    <a href=SiteRoute::Services.path() class="btn btn--secondary">"View Services"</a>
                </div>
            </section>
        </div>
    }
}

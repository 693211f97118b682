//! Studio story: mission, values, skills, team and headline numbers.

use leptos::prelude::*;

use crate::content::{SKILLS, STUDIO_STATS, TEAM, VALUES, catalog};
use crate::pages::stat_grid;
use crate::routes::SiteRoute;

#[component]
pub fn AboutPage() -> impl IntoView {
    let company = &catalog().company;

    view! {
        <div class="page page--about">
            <section class="section">
                <div class="section__header">
                    <h1 class="display-huge">{format!("About {}", company.name)}</h1>
                    <p class="body-large">{company.about}</p>
                    <p class="body-medium">
                        "We combine cutting-edge technology with creative design to deliver websites that don't just look amazing. They perform exceptionally and drive real business results."
                    </p>
                </div>
            </section>

            <section class="section section--boxed">
                <h2 class="display-medium section__title">"Our Mission"</h2>
                <p class="body-large mission">
                    "To revolutionize the digital landscape by creating futuristic web experiences that captivate audiences, drive engagement, and deliver measurable results for businesses of all sizes."
                </p>
            </section>

            <section class="section">
                <h2 class="display-medium section__title">"Our Values"</h2>
                <div class="card-grid card-grid--four">
                    {VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div class="card card--centered">
                                    <div class="card__icon">{value.icon}</div>
                                    <h3 class="heading-3">{value.title}</h3>
                                    <p class="body-small">{value.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="display-medium section__title">"Our Expertise"</h2>
                <div class="skills">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill">
                                    <div class="skill__icon">{skill.icon}</div>
                                    <div class="skill__body">
                                        <div class="skill__header">
                                            <span class="heading-3">{skill.name}</span>
                                            <span class="skill__value">{format!("{}%", skill.percentage)}</span>
                                        </div>
                                        <div class="skill__track">
                                            <div class="skill__bar" style=format!("width: {}%;", skill.percentage)></div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="display-medium section__title">"Meet Our Team"</h2>
                <div class="card-grid card-grid--three">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="card team-member">
                                    <img class="team-member__photo" src=member.image alt=member.name loading="lazy"/>
                                    <div class="team-member__body">
                                        <h3 class="heading-3">{member.name}</h3>
                                        <p class="body-medium team-member__role">{member.role}</p>
                                        <p class="body-small">{member.expertise}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--boxed">{stat_grid(&STUDIO_STATS)}</section>

            <section class="section section--cta">
                <h2 class="display-medium">"Ready to Work Together?"</h2>
                <p class="body-large">
                    "Let's discuss your project and see how we can help you achieve your digital goals."
                </p>
                <div class="hero__actions">
                    <a href=SiteRoute::Contact.path() class="btn btn--primary">"Get In Touch →"</a>
                    <a href=SiteRoute::Services.path() class="btn btn--secondary">"Our Services"</a>
                </div>
            </section>
        </div>
    }
}

//! CashCue AI teaser page with the waitlist signup form.

use leptos::prelude::*;

use crate::components::lead_form::{TextAreaField, TextField, submit, submit_label};
use crate::components::scene::{HERO_SCENE, Scene};
use crate::components::success_popup::SuccessPopup;
use crate::content::{INCOME_STREAMS, WAITLIST_BENEFITS, WAITLIST_FEATURES, WAITLIST_STATS, catalog};
use crate::pages::stat_grid;
use crate::state::forms::{FormKind, FormState, Submission};

#[component]
pub fn AiWaitlistPage() -> impl IntoView {
    let waitlist = &catalog().company.ai_waitlist;
    let form = RwSignal::new(FormState::new(FormKind::Waitlist));
    let submission = RwSignal::new(Submission::default());
    let endpoint = waitlist.endpoint;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, submission, endpoint);
    };
    let close_popup = Callback::new(move |()| submission.update(Submission::dismiss));

    view! {
        <div class="page page--waitlist">
            <section class="hero">
                <div class="hero__copy">
                    <span class="badge">"Coming Soon"</span>
                    <h1 class="display-huge">{waitlist.title}</h1>
                    <p class="body-large">{waitlist.description}</p>

                    <div class="panel">
                        <h3 class="heading-2">"Join the Waitlist"</h3>
                        <form class="lead-form" on:submit=on_submit>
                            <TextField form=form field="name" label="Name" placeholder="Your full name" required=true/>
                            <TextField
                                form=form
                                field="email"
                                label="Email"
                                input_type="email"
                                placeholder="Your email address"
                                required=true
                            />
                            <TextAreaField
                                form=form
                                field="interests"
                                label="Interests"
                                placeholder="What passive income opportunities interest you most?"
                                rows=3
                            />
                            <button
                                type="submit"
                                class="btn btn--primary btn--block"
                                disabled=move || submission.with(Submission::is_in_flight)
                            >
                                {move || submit_label(submission.get(), "Join the Waitlist", "Joining...")}
                            </button>
                        </form>
                    </div>

                    <div class="benefits">
                        <p class="body-medium benefits__title">"Early Access Benefits:"</p>
                        <ul class="feature-list">
                            {WAITLIST_BENEFITS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="hero__scene">
                    <Scene scene=HERO_SCENE.with_hue_rotate(60)/>
                </div>
            </section>

            <section class="section">
                <div class="section__header">
                    <h2 class="display-medium">"What CashCue AI Will Offer"</h2>
                    <p class="body-large">
                        "Our AI-powered platform will revolutionize how you discover and implement passive income strategies."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {WAITLIST_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card card--centered">
                                    <div class="card__icon">{feature.icon}</div>
                                    <h3 class="heading-2">{feature.title}</h3>
                                    <p class="body-medium">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="display-medium section__title">"Passive Income Streams We'll Cover"</h3>
                <ol class="streams">
                    {INCOME_STREAMS
                        .iter()
                        .enumerate()
                        .map(|(index, stream)| {
                            view! {
                                <li class="streams__item">
                                    <span class="streams__index">{index + 1}</span>
                                    <p class="body-medium">{*stream}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="section section--tinted section--cta">
                <h2 class="display-medium">"Join 10,000+ Future Entrepreneurs"</h2>
                <p class="body-large">
                    "Be the first to access our revolutionary AI platform that will change how you think about passive income."
                </p>
                {stat_grid(&WAITLIST_STATS)}
            </section>

            <Show when=move || submission.with(Submission::is_confirmed)>
                <SuccessPopup
                    title="Welcome to the Waitlist!"
                    message="You'll be the first to know when CashCue AI launches. Get ready to revolutionize your passive income journey!"
                    on_close=close_popup
                />
            </Show>
        </div>
    }
}

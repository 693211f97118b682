//! Contact page: project inquiry form plus studio contact details.

use leptos::prelude::*;

use crate::components::lead_form::{SelectField, TextAreaField, TextField, submit, submit_label};
use crate::components::success_popup::SuccessPopup;
use crate::content::{BUDGETS, PROJECT_TYPES, catalog, whatsapp_link};
use crate::state::forms::{FormKind, FormState, Submission};

const RESPONSE_TIMES: [&str; 3] =
    ["Initial response within 2 hours", "Detailed proposal within 24 hours", "Project timeline within 48 hours"];

const BUSINESS_HOURS: [(&str, &str); 3] =
    [("Monday - Friday", "9:00 AM - 6:00 PM PST"), ("Saturday", "10:00 AM - 4:00 PM PST"), ("Sunday", "Closed")];

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = &catalog().company.contact;
    let form = RwSignal::new(FormState::new(FormKind::Contact));
    let submission = RwSignal::new(Submission::default());
    let endpoint = contact.endpoint;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(form, submission, endpoint);
    };
    let close_popup = Callback::new(move |()| submission.update(Submission::dismiss));

    view! {
        <div class="page page--contact">
            <section class="section">
                <div class="section__header">
                    <h1 class="display-huge">"Get In Touch"</h1>
                    <p class="body-large">
                        "Ready to start your next project? Let's discuss your ideas and create something amazing together."
                    </p>
                </div>

                <div class="contact-layout">
                    <div class="panel">
                        <h2 class="heading-2">"Send Us a Message"</h2>
                        <form id="contact-form" class="lead-form" on:submit=on_submit>
                            <div class="lead-form__row">
                                <TextField form=form field="name" label="Full Name *" placeholder="Your name" required=true/>
                                <TextField
                                    form=form
                                    field="email"
                                    label="Email Address *"
                                    input_type="email"
                                    placeholder="your@email.com"
                                    required=true
                                />
                            </div>
                            <div class="lead-form__row">
                                <TextField form=form field="company" label="Company Name" placeholder="Your company"/>
                                <SelectField form=form field="projectType" label="Project Type" options=&PROJECT_TYPES/>
                            </div>
                            <SelectField form=form field="budget" label="Budget Range" options=&BUDGETS/>
                            <TextAreaField
                                form=form
                                field="message"
                                label="Project Details *"
                                placeholder="Tell us about your project, goals, and any specific requirements..."
                                required=true
                                rows=6
                            />
                            <button
                                type="submit"
                                class="btn btn--primary btn--block"
                                disabled=move || submission.with(Submission::is_in_flight)
                            >
                                {move || submit_label(submission.get(), "Send Message", "Sending...")}
                            </button>
                        </form>
                    </div>

                    <div class="contact-details">
                        <div class="panel">
                            <h2 class="heading-2">"Contact Information"</h2>
                            <div class="contact-item">
                                <h3 class="heading-3">"Email"</h3>
                                <a href=format!("mailto:{}", contact.email)>{contact.email}</a>
                            </div>
                            <div class="contact-item">
                                <h3 class="heading-3">"WhatsApp"</h3>
                                <a href=whatsapp_link(contact.whatsapp) target="_blank" rel="noopener noreferrer">
                                    {contact.whatsapp}
                                </a>
                            </div>
                            <div class="contact-item">
                                <h3 class="heading-3">"Location"</h3>
                                <p class="body-medium">"United States" <br/> "Remote Services Worldwide"</p>
                            </div>
                        </div>

                        <div class="panel">
                            <h3 class="heading-3">"Response Time"</h3>
                            <ul class="feature-list">
                                {RESPONSE_TIMES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                            </ul>
                        </div>

                        <div class="panel">
                            <h3 class="heading-3">"Business Hours"</h3>
                            <dl class="hours">
                                {BUSINESS_HOURS
                                    .iter()
                                    .map(|(days, hours)| view! { <dt>{*days}</dt> <dd>{*hours}</dd> })
                                    .collect_view()}
                            </dl>
                            <p class="body-small hours__note">
                                "Emergency support available 24/7 for existing clients"
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <Show when=move || submission.with(Submission::is_confirmed)>
                <SuccessPopup
                    title="Thank You!"
                    message="We will get back to you within 24 hours."
                    on_close=close_popup
                />
            </Show>
        </div>
    }
}

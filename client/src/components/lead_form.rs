//! Shared pieces of the contact and waitlist forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `RwSignal<FormState>` and a `RwSignal<Submission>`; the field
//! components here bind inputs to the form and `submit` drives one post to
//! the form endpoint.
//!
//! ERROR HANDLING
//! ==============
//! A failed post is logged to the console and leaves the form as typed. The
//! page may have unmounted by the time the post resolves, so completion only
//! uses the `try_*` signal accessors.

use leptos::prelude::*;

use crate::net::forms::SubmitError;
use crate::state::forms::{FormState, Submission};

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

/// Start a submission of `form` to `endpoint`.
///
/// Does nothing while a previous submission is in flight or when a required
/// field is empty.
pub fn submit(form: RwSignal<FormState>, submission: RwSignal<Submission>, endpoint: &'static str) {
    let mut next = submission.get_untracked();
    let Ok(payload) = form.with_untracked(|state| next.begin(state)) else {
        return;
    };
    submission.set(next);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::forms::post_json(endpoint, &payload).await;
        if let Err(e) = &outcome {
            log::error!("form submit to {endpoint} failed: {e}");
        }
        complete(form, submission, &outcome);
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload);
        complete(form, submission, &Err(SubmitError::Unavailable));
    }
}

fn complete(form: RwSignal<FormState>, submission: RwSignal<Submission>, outcome: &Result<(), SubmitError>) {
    let Some(mut next) = submission.try_get_untracked() else {
        return;
    };
    form.try_update(|state| next.resolve(state, outcome));
    submission.try_set(next);
}

/// Submit button label: `busy` while a post is in flight.
pub fn submit_label(submission: Submission, idle: &'static str, busy: &'static str) -> &'static str {
    if submission.is_in_flight() { busy } else { idle }
}

#[component]
pub fn TextField(
    form: RwSignal<FormState>,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                name=field
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|state| state.get(field).to_owned())
                on:input=move |ev| {
                    form.update(|state| {
                        state.set(field, event_target_value(&ev));
                    });
                }
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    form: RwSignal<FormState>,
    field: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = 5)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--area"
                name=field
                rows=rows
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|state| state.get(field).to_owned())
                on:input=move |ev| {
                    form.update(|state| {
                        state.set(field, event_target_value(&ev));
                    });
                }
            ></textarea>
        </label>
    }
}

/// Select bound to `field`; `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    form: RwSignal<FormState>,
    field: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                name=field
                prop:value=move || form.with(|state| state.get(field).to_owned())
                on:change=move |ev| {
                    form.update(|state| {
                        state.set(field, event_target_value(&ev));
                    });
                }
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

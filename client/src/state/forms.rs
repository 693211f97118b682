//! Lead-form state: field values plus the submit lifecycle.
//!
//! DESIGN
//! ======
//! `FormState` is a flat field-name to string mapping whose key set is fixed
//! by `FormKind`, so the JSON body always carries every field of its form.
//! `Submission` tracks the in-flight guard and the confirmation popup; it is
//! the only thing allowed to clear a form, and only after a successful post.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::net::forms::SubmitError;

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Which of the two site forms a `FormState` belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Waitlist,
}

impl FormKind {
    /// Field names, in the order they are sent.
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["name", "email", "company", "message", "projectType", "budget"],
            Self::Waitlist => &["name", "email", "interests"],
        }
    }

    #[must_use]
    pub const fn required(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["name", "email", "message"],
            Self::Waitlist => &["name", "email"],
        }
    }

    /// Constant `form_type` tag merged into the payload, if any.
    #[must_use]
    pub const fn form_type(self) -> Option<&'static str> {
        match self {
            Self::Contact => None,
            Self::Waitlist => Some("AI Waitlist"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Empty form with every field present.
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        let values = kind.fields().iter().map(|f| (*f, String::new())).collect();
        Self { kind, values }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Current value of `field`; unknown fields read as empty.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Replace a field's value. Returns `false` for fields this form does not
    /// have.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Required fields that are empty or whitespace-only.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.kind
            .required()
            .iter()
            .copied()
            .filter(|field| self.get(field).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// JSON object posted to the form endpoint.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let mut body = Map::new();
        for field in self.kind.fields() {
            body.insert((*field).to_owned(), Value::String(self.get(field).to_owned()));
        }
        if let Some(form_type) = self.kind.form_type() {
            body.insert("form_type".to_owned(), Value::String(form_type.to_owned()));
        }
        Value::Object(body)
    }
}

/// Why a submit click did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not resolved yet.
    InFlight,
    /// Required fields are empty.
    Missing(Vec<&'static str>),
}

/// Submit lifecycle for one form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    in_flight: bool,
    confirmed: bool,
}

impl Submission {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the confirmation popup is showing.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Start a submission. On success the caller must post the returned
    /// payload exactly once and report back through `resolve`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitBlocked` when a submission is already in flight or a
    /// required field is empty; nothing should be sent in that case.
    pub fn begin(&mut self, form: &FormState) -> Result<Value, SubmitBlocked> {
        if self.in_flight {
            return Err(SubmitBlocked::InFlight);
        }
        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(SubmitBlocked::Missing(missing));
        }
        self.in_flight = true;
        Ok(form.to_payload())
    }

    /// Apply the outcome of the post started by `begin`. Success clears the
    /// form and shows the confirmation; failure leaves the form untouched.
    pub fn resolve(&mut self, form: &mut FormState, outcome: &Result<(), SubmitError>) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        if outcome.is_ok() {
            form.reset();
            self.confirmed = true;
        }
    }

    /// Close the confirmation popup.
    pub fn dismiss(&mut self) {
        self.confirmed = false;
    }
}

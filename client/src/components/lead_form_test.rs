use super::*;
use crate::state::forms::FormKind;

fn filled_contact() -> FormState {
    let mut form = FormState::new(FormKind::Contact);
    form.set("name", "Ada");
    form.set("email", "ada@example.com");
    form.set("message", "Need a landing page");
    form
}

#[test]
fn submit_label_switches_while_in_flight() {
    let mut submission = Submission::default();
    assert_eq!(submit_label(submission, "Send Message", "Sending..."), "Send Message");
    assert!(submission.begin(&filled_contact()).is_ok());
    assert_eq!(submit_label(submission, "Send Message", "Sending..."), "Sending...");
}

#[test]
fn submit_with_missing_required_fields_sends_nothing() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(FormState::new(FormKind::Contact));
        form.update(|state| {
            state.set("company", "Acme");
        });
        let submission = RwSignal::new(Submission::default());

        submit(form, submission, "https://forms.invalid/f/test");

        assert_eq!(submission.get_untracked(), Submission::default());
        assert_eq!(form.with_untracked(|state| state.get("company").to_owned()), "Acme");
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_outside_browser_fails_and_keeps_values() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled_contact());
        let submission = RwSignal::new(Submission::default());

        submit(form, submission, "https://forms.invalid/f/test");

        let after = submission.get_untracked();
        assert!(!after.is_in_flight());
        assert!(!after.is_confirmed());
        assert_eq!(form.get_untracked(), filled_contact());
    });
}

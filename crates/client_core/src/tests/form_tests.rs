use super::*;
use shared::validation::{EMAIL_ERROR, NAME_ERROR, WHATSAPP_ERROR};

fn filled(name: &str, email: &str, whatsapp: &str) -> FormState {
    let mut form = FormState::new();
    form.set_field(ContactField::Name, name);
    form.set_field(ContactField::Email, email);
    form.set_field(ContactField::Whatsapp, whatsapp);
    form
}

fn accepted(name: &str) -> Result<SubmissionReceipt, SubmissionError> {
    Ok(SubmissionReceipt {
        status: 200,
        user_name: name.to_string(),
    })
}

#[test]
fn starts_idle_and_submittable() {
    let form = FormState::new();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.can_submit());
    assert!(!form.is_loading());
    assert!(form.errors().is_clear());
}

#[test]
fn invalid_attempt_returns_to_idle_with_errors() {
    let mut form = filled("Al", "a@b.net", "123");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.errors().name, NAME_ERROR);
    assert_eq!(form.errors().email, EMAIL_ERROR);
    assert_eq!(form.errors().whatsapp, WHATSAPP_ERROR);
}

#[test]
fn validation_replaces_previous_errors_wholesale() {
    let mut form = filled("Al", "a@b.com", "12345678901");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.errors().name, NAME_ERROR);

    form.set_field(ContactField::Name, "Alice");
    form.set_field(ContactField::Email, "broken");
    assert!(form.begin_submit().is_none());
    assert!(form.errors().name.is_empty());
    assert_eq!(form.errors().email, EMAIL_ERROR);
}

#[test]
fn valid_attempt_enters_submitting_and_blocks_second_attempt() {
    let mut form = filled("Alice", "a@b.com", "12345678901");
    let snapshot = form.begin_submit().expect("valid");
    assert_eq!(snapshot.name, "Alice");
    assert!(form.is_loading());
    assert!(!form.can_submit());
    assert!(form.begin_submit().is_none(), "one request in flight at most");
}

#[test]
fn success_clears_fields_and_targets_confirmation() {
    let mut form = filled("Alice", "a@b.com", "12345678901");
    form.begin_submit().expect("valid");

    let (route, state) = form.finish_submit(&accepted("Alice")).expect("navigate");

    assert_eq!(route, Route::Success);
    assert_eq!(state.user_name.as_deref(), Some("Alice"));
    assert!(form.fields().is_empty());
    assert_eq!(form.phase(), SubmissionPhase::Submitted);
    assert!(!form.is_loading());
    assert!(!form.can_submit());
}

#[test]
fn failure_keeps_fields_and_allows_retry_by_user() {
    let mut form = filled("Alice", "a@b.com", "12345678901");
    form.begin_submit().expect("valid");

    let target = form.finish_submit(&Err(SubmissionError::Rejected { status: 500 }));

    assert!(target.is_none());
    assert_eq!(form.phase(), SubmissionPhase::Error);
    assert_eq!(form.fields().name, "Alice");
    assert!(form.alert().is_some());
    assert!(form.errors().is_clear(), "no inline errors for relay failures");
    assert!(!form.is_loading());
    assert!(form.can_submit());

    form.dismiss_alert();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.alert().is_none());
}

#[test]
fn outcome_without_pending_request_is_ignored() {
    let mut form = filled("Alice", "a@b.com", "12345678901");
    assert!(form.finish_submit(&accepted("Alice")).is_none());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.fields().name, "Alice");
}

#[test]
fn overlong_whatsapp_is_kept_verbatim_and_rejected() {
    let mut form = filled("Alice", "a@b.com", "123456789012");
    assert_eq!(form.fields().whatsapp, "123456789012");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.errors().whatsapp, WHATSAPP_ERROR);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

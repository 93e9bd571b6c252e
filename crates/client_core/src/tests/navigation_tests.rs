use super::*;

#[test]
fn paths_map_to_routes() {
    assert_eq!(Route::from_path("/"), Route::Form);
    assert_eq!(Route::from_path("/success"), Route::Success);
    assert_eq!(Route::from_path("/success/"), Route::Success);
    assert_eq!(Route::from_path("/nowhere"), Route::Form);
    assert_eq!(Route::Success.path(), "/success");
}

#[test]
fn fresh_session_stays_on_form() {
    let navigator = Navigator::start(&Session::new(false), "/");
    assert_eq!(navigator.current().route, Route::Form);
}

#[test]
fn submitted_session_is_redirected_with_history_replaced() {
    let navigator = Navigator::start(&Session::new(true), "/");
    assert_eq!(navigator.current().route, Route::Success);
    assert_eq!(navigator.history().len(), 1);
    assert_eq!(navigator.current().state, NavigationState::default());
}

#[test]
fn go_back_from_confirmation_bounces_to_confirmation() {
    let session = Session::new(true);
    let mut navigator = Navigator::start(&session, "/success");

    let outcome = navigator.navigate(&session, Route::Form, NavigationState::default());

    assert_eq!(outcome, GuardOutcome::Redirected);
    assert_eq!(navigator.current().route, Route::Success);
    assert!(!navigator.history().routes().contains(&Route::Form));
}

#[test]
fn back_after_submission_cannot_reexpose_form() {
    let mut session = Session::new(false);
    let mut navigator = Navigator::start(&session, "/");

    session.mark_submitted();
    navigator.navigate(
        &session,
        Route::Success,
        NavigationState::with_user_name("Alice"),
    );

    assert_eq!(navigator.back(&session), GuardOutcome::Redirected);
    assert_eq!(navigator.current().route, Route::Success);
    assert_eq!(navigator.back(&session), GuardOutcome::Stayed);
}

#[test]
fn blank_names_are_not_carried() {
    assert_eq!(NavigationState::with_user_name("   ").user_name, None);
}

#[test]
fn history_back_keeps_last_entry() {
    let mut history = History::new(Route::Form);
    assert!(!history.back());
    history.push(Route::Success, NavigationState::default());
    assert!(history.back());
    assert_eq!(history.current().route, Route::Form);
}

//! Applies backend events and user intents to the app model without touching egui.

use client_core::{
    FormState, GuardOutcome, NavigationState, Navigator, Route, Session, SuccessView,
};
use shared::{domain::ContactField, error::SubmissionError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub struct AppModel {
    pub form: FormState,
    session: Session,
    /// `None` until the persisted flag has been read.
    navigator: Option<Navigator>,
    pub status: String,
    pub banner: Option<UiError>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            session: Session::default(),
            navigator: None,
            status: "Loading session".to_string(),
            banner: None,
        }
    }

    pub fn current_route(&self) -> Option<Route> {
        self.navigator.as_ref().map(|nav| nav.current().route)
    }

    pub fn success_view(&self) -> SuccessView {
        let state = self
            .navigator
            .as_ref()
            .map(|nav| nav.current().state.clone())
            .unwrap_or_default();
        SuccessView::from_state(&state)
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::SessionLoaded { submitted } => {
                self.session = Session::new(submitted);
                self.navigator = Some(Navigator::start(&self.session, Route::Form.path()));
                self.status = if submitted {
                    "Message already sent from this profile".to_string()
                } else {
                    "Ready".to_string()
                };
            }
            UiEvent::SubmissionFinished(outcome) => {
                if outcome.is_ok() {
                    self.session.mark_submitted();
                }
                self.status = match &outcome {
                    Ok(_) => "Message sent".to_string(),
                    Err(err) => format!("Send failed: {err}"),
                };
                if let Some((route, state)) = self.form.finish_submit(&outcome) {
                    self.navigate(route, state);
                }
            }
            UiEvent::Error(err) => {
                self.status = err.message().to_string();
                self.banner = Some(err);
            }
        }
    }

    pub fn edit_field(&mut self, field: ContactField, value: String) {
        self.form.set_field(field, value);
    }

    /// Validates and, when the form is valid, yields the command to queue.
    pub fn request_submit(&mut self) -> Option<BackendCommand> {
        let fields = self.form.begin_submit();
        if fields.is_none() {
            if let Some((field, message)) = self.form.errors().first() {
                self.status = format!("{}: {message}", field.placeholder());
            }
        }
        fields.map(|fields| BackendCommand::Submit { fields })
    }

    /// Called when a submit command never reached the worker.
    pub fn submit_not_dispatched(&mut self, reason: &str) {
        let outcome = Err(SubmissionError::Network(reason.to_string()));
        self.form.finish_submit(&outcome);
        self.banner = Some(UiError::from_message(UiErrorContext::Submission, reason));
    }

    pub fn go_back(&mut self) {
        self.navigate(Route::Form, NavigationState::default());
    }

    fn navigate(&mut self, route: Route, state: NavigationState) {
        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };
        if navigator.navigate(&self.session, route, state) == GuardOutcome::Redirected {
            self.status = "Message already sent from this profile".to_string();
        }
    }
}

//! Form View state: field values, inline errors, and the submission phase.
//!
//! The phase machine is `Idle -> Validating -> (Idle | Submitting)` on a submit
//! attempt, then `Submitting -> (Submitted | Error)` once the relay answers.
//! `Error` accepts a new attempt just like `Idle`; `Submitted` is terminal.

use shared::{
    domain::{ContactField, FieldErrors, FormFields},
    error::SubmissionError,
    protocol::SubmissionReceipt,
    validation::validate,
};
use tracing::debug;

use crate::navigation::{NavigationState, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Submitted,
    Error,
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: FormFields,
    errors: FieldErrors,
    phase: SubmissionPhase,
    alert: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            phase: SubmissionPhase::Idle,
            alert: None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Error)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Replaces the whole error set and returns the verdict.
    pub fn validate(&mut self) -> bool {
        let report = validate(&self.fields);
        self.errors = report.errors;
        report.valid
    }

    /// Starts a submit attempt. Returns the snapshot to send, or `None` when
    /// the form is invalid or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormFields> {
        if !self.can_submit() {
            debug!(phase = ?self.phase, "form: submit ignored");
            return None;
        }

        self.alert = None;
        self.phase = SubmissionPhase::Validating;
        if !self.validate() {
            self.phase = SubmissionPhase::Idle;
            return None;
        }

        self.phase = SubmissionPhase::Submitting;
        Some(self.fields.clone())
    }

    /// Applies the relay outcome. On success the fields are cleared and the
    /// navigation target is returned; on failure the fields stay as typed and
    /// an alert is raised.
    pub fn finish_submit(
        &mut self,
        outcome: &Result<SubmissionReceipt, SubmissionError>,
    ) -> Option<(Route, NavigationState)> {
        if self.phase != SubmissionPhase::Submitting {
            debug!(phase = ?self.phase, "form: stray submission outcome ignored");
            return None;
        }

        match outcome {
            Ok(receipt) => {
                self.fields.clear();
                self.phase = SubmissionPhase::Submitted;
                Some((
                    Route::Success,
                    NavigationState::with_user_name(&receipt.user_name),
                ))
            }
            Err(err) => {
                self.phase = SubmissionPhase::Error;
                self.alert = Some(err.user_message().to_string());
                None
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        if self.phase == SubmissionPhase::Error {
            self.phase = SubmissionPhase::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;

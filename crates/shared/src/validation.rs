//! Local field rules applied before anything is sent to the relay.
//!
//! The thresholds are fixed product rules. The email rule in particular is a
//! deliberately loose check (an `@` and a `.com` suffix), not RFC validation.

use crate::domain::{ContactField, FieldErrors, FormFields};

pub const MIN_NAME_CHARS: usize = 3;
pub const WHATSAPP_DIGITS: usize = 11;
pub const REQUIRED_EMAIL_SUFFIX: &str = ".com";

pub const NAME_ERROR: &str = "Name must be at least 3 characters";
pub const EMAIL_ERROR: &str = "Email must be valid and end with .com";
pub const WHATSAPP_ERROR: &str = "Must be a valid phone number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: FieldErrors,
    pub valid: bool,
}

pub fn check_name(name: &str) -> Option<&'static str> {
    (name.trim().chars().count() < MIN_NAME_CHARS).then_some(NAME_ERROR)
}

pub fn check_email(email: &str) -> Option<&'static str> {
    let ok = email.contains('@') && email.ends_with(REQUIRED_EMAIL_SUFFIX);
    (!ok).then_some(EMAIL_ERROR)
}

pub fn check_whatsapp(whatsapp: &str) -> Option<&'static str> {
    let ok = whatsapp.len() == WHATSAPP_DIGITS && whatsapp.bytes().all(|b| b.is_ascii_digit());
    (!ok).then_some(WHATSAPP_ERROR)
}

pub fn check_field(field: ContactField, value: &str) -> Option<&'static str> {
    match field {
        ContactField::Name => check_name(value),
        ContactField::Email => check_email(value),
        ContactField::Whatsapp => check_whatsapp(value),
    }
}

/// Runs every rule and builds a fresh error set; nothing is carried over from
/// a previous pass.
pub fn validate(fields: &FormFields) -> ValidationReport {
    let mut errors = FieldErrors::default();
    let mut valid = true;

    for (field, value) in fields.iter() {
        if let Some(message) = check_field(field, value) {
            errors.set(field, message);
            valid = false;
        }
    }

    ValidationReport { errors, valid }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;

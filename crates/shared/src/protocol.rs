use serde::{Deserialize, Serialize};

use crate::domain::FormFields;

/// Acknowledgment format requested from the relay.
pub const ACCEPT_JSON: &str = "application/json";
pub const SUBMITTED_FLAG_KEY: &str = "formSubmitted";
pub const SUBMITTED_FLAG_VALUE: &str = "true";
pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/xovepqgk";

/// Only the status code of a relay response is consumed; the body is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub status: u16,
}

impl RelayResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `(part name, value)` pairs in relay order.
pub fn multipart_parts(fields: &FormFields) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .map(|(field, value)| (field.wire_name(), value.to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub status: u16,
    /// Trimmed name as submitted, carried to the confirmation view.
    pub user_name: String,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown for every failed submission; transient and permanent failures are
/// not distinguished for the user.
pub const SUBMISSION_ALERT: &str =
    "Something went wrong while sending your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Rejected,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("relay request failed: {0}")]
    Network(String),
}

impl SubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Rejected { .. } => ErrorCode::Rejected,
            Self::Network(_) => ErrorCode::Network,
        }
    }

    pub fn user_message(&self) -> &'static str {
        SUBMISSION_ALERT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_failures_collapse_to_one_alert() {
        let rejected = SubmissionError::Rejected { status: 422 };
        let network = SubmissionError::Network("connection refused".into());
        assert_eq!(rejected.user_message(), network.user_message());
        assert_eq!(rejected.code(), ErrorCode::Rejected);
        assert_eq!(network.code(), ErrorCode::Network);
    }

    #[test]
    fn display_keeps_detail_for_logs() {
        let err = SubmissionError::Rejected { status: 503 };
        assert_eq!(err.to_string(), "relay rejected submission with status 503");
    }
}

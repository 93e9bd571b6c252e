use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, multipart, Client};
use shared::{
    domain::FormFields,
    error::SubmissionError,
    protocol::{multipart_parts, RelayResponse, SubmissionReceipt, ACCEPT_JSON},
};
use tracing::{error, info, warn};

pub mod config;
mod flag_store;
pub mod form;
pub mod navigation;
pub mod session;
pub mod views;

pub use flag_store::{MemoryFlagStore, SubmissionFlagStore};
pub use form::{FormState, SubmissionPhase};
pub use navigation::{GuardOutcome, History, Location, NavigationState, Navigator, Route};
pub use session::Session;
pub use views::SuccessView;

#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Sends one contact submission; never retries.
    async fn post_contact(&self, fields: &FormFields) -> Result<RelayResponse, SubmissionError>;
}

pub struct HttpRelayTransport {
    http: Client,
    endpoint: String,
}

impl HttpRelayTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn post_contact(&self, fields: &FormFields) -> Result<RelayResponse, SubmissionError> {
        let form = multipart_parts(fields)
            .into_iter()
            .fold(multipart::Form::new(), |form, (part, value)| {
                form.text(part, value)
            });

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, ACCEPT_JSON)
            .multipart(form)
            .send()
            .await
            .map_err(|err| SubmissionError::Network(err.to_string()))?;

        Ok(RelayResponse {
            status: response.status().as_u16(),
        })
    }
}

/// Owns the single outbound request and the flag write that follows a
/// successful one.
#[derive(Clone)]
pub struct SubmissionController {
    transport: Arc<dyn RelayTransport>,
    flags: Arc<dyn SubmissionFlagStore>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn RelayTransport>, flags: Arc<dyn SubmissionFlagStore>) -> Self {
        Self { transport, flags }
    }

    pub async fn submit(&self, fields: &FormFields) -> Result<SubmissionReceipt, SubmissionError> {
        info!(
            name_len = fields.name.len(),
            email_len = fields.email.len(),
            "submission: posting contact form to relay"
        );

        let response = match self.transport.post_contact(fields).await {
            Ok(response) => response,
            Err(err) => {
                error!(code = ?err.code(), "submission: relay request failed: {err}");
                return Err(err);
            }
        };

        if !response.is_ok() {
            let err = SubmissionError::Rejected {
                status: response.status,
            };
            error!(code = ?err.code(), status = response.status, "submission: {err}");
            return Err(err);
        }

        // Delivered at this point, whether or not the flag write lands.
        if let Err(err) = self.flags.mark_submitted().await {
            warn!("submission: delivered but failed to persist submitted flag: {err:#}");
        }

        info!(status = response.status, "submission: relay accepted contact form");
        Ok(SubmissionReceipt {
            status: response.status,
            user_name: fields.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

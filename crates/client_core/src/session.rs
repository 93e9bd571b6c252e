use anyhow::{Context, Result};

use crate::flag_store::SubmissionFlagStore;

/// Explicit view of the persisted "already submitted" flag, read once at
/// start-up and handed to whatever needs to consult it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    submitted: bool,
}

impl Session {
    pub fn new(submitted: bool) -> Self {
        Self { submitted }
    }

    pub async fn load(flags: &dyn SubmissionFlagStore) -> Result<Self> {
        let submitted = flags
            .is_submitted()
            .await
            .context("failed to read submitted flag")?;
        Ok(Self { submitted })
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// One-way: nothing in the app clears it again.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}

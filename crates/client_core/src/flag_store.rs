use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use storage::Storage;

#[async_trait]
pub trait SubmissionFlagStore: Send + Sync {
    async fn is_submitted(&self) -> Result<bool>;
    async fn mark_submitted(&self) -> Result<()>;
}

#[async_trait]
impl SubmissionFlagStore for Storage {
    async fn is_submitted(&self) -> Result<bool> {
        Storage::is_submitted(self).await
    }

    async fn mark_submitted(&self) -> Result<()> {
        Storage::mark_submitted(self).await
    }
}

/// Process-scoped flag, used when no profile database is available.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    submitted: AtomicBool,
}

impl MemoryFlagStore {
    pub fn new(submitted: bool) -> Self {
        Self {
            submitted: AtomicBool::new(submitted),
        }
    }
}

#[async_trait]
impl SubmissionFlagStore for MemoryFlagStore {
    async fn is_submitted(&self) -> Result<bool> {
        Ok(self.submitted.load(Ordering::SeqCst))
    }

    async fn mark_submitted(&self) -> Result<()> {
        self.submitted.store(true, Ordering::SeqCst);
        Ok(())
    }
}

//! Backend commands queued from UI to backend worker.

use shared::domain::FormFields;

pub enum BackendCommand {
    LoadSession,
    Submit { fields: FormFields },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadSession => "load_session",
            Self::Submit { .. } => "submit",
        }
    }
}

use docredact_core::HostError;
use thiserror::Error;

use crate::redact::RedactionSummary;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),
}

/// A redaction run that aborted. Replacements committed before the failure
/// stay in the document; `applied` counts them.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct RunFailure {
    pub applied: RedactionSummary,
    #[source]
    pub error: EngineError,
}

impl RunFailure {
    pub fn new(applied: RedactionSummary, error: impl Into<EngineError>) -> Self {
        Self {
            applied,
            error: error.into(),
        }
    }

    /// Text shown to the user
    pub fn status_message(&self) -> String {
        format!("Error: {}", self.error)
    }
}

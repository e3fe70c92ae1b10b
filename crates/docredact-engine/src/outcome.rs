use serde::Serialize;

/// Result of one optional step of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum StepOutcome<T = ()> {
    Completed(T),
    /// Turned off by settings
    Skipped,
    /// The step failed; the document keeps what earlier steps did
    Degraded { reason: String },
    /// The host lacks the capability. Expected, not an error.
    Unavailable,
}

impl<T> StepOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed(_))
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, StepOutcome::Degraded { .. })
    }
}

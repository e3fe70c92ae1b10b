//! Redaction run orchestration for docredact
//!
//! A run is a fixed sequence against one `DocumentHost`:
//! redact every pattern, stamp the confidential header, enable change
//! tracking, report. Only the redaction step can fail the run; the other
//! two report a `StepOutcome` instead.

pub mod error;
pub mod header;
pub mod outcome;
pub mod redact;
pub mod run;
pub mod session;
pub mod status;
pub mod tracking;

pub use error::{EngineError, RunFailure};
pub use header::{CONFIDENTIAL_HEADER, HeaderStamp, stamp_header};
pub use outcome::StepOutcome;
pub use redact::{PatternCount, RedactionSummary, redact_document};
pub use run::{HEADER_WARNING, RunReport, RunSettings, run};
pub use session::{
    Notification, NotificationKind, READY_BANNER, READY_STATUS, Session, ribbon_action,
};
pub use status::{ConsoleSink, MemorySink, StatusReporter, StatusSink};
pub use tracking::enable_tracking;

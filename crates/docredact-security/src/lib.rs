//! PII pattern matching for docredact
//!
//! Holds the fixed built-in patterns (email, SSN-like id, phone), the
//! ordered `PatternSet` a run applies, and a pure-string `Redactor` for
//! dry runs that never touch a document host.

pub mod pattern;
pub mod redactor;

pub use pattern::{PatternError, PatternSet, RedactionPattern};
pub use redactor::{REDACTION_MARKER, RedactionInfo, Redactor};

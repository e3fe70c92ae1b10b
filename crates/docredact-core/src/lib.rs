//! Core document model for docredact
//!
//! This crate contains:
//! - The host editing surface contract (`DocumentHost`)
//! - Two-phase edits (`EditBatch` queued, then `sync`)
//! - Document types (spans, sections, headers, tracking)
//! - An in-memory host (`MemoryDocument`)

pub mod batch;
pub mod document;
pub mod error;
pub mod host;
pub mod memory;
pub mod search;

pub use batch::{EditBatch, EditOp, InsertLocation, SyncReceipt};
pub use document::{
    Alignment, Header, HeaderKind, HostInfo, HostKind, Paragraph, ParagraphFormat, Revision,
    SearchOptions, Section, Span, TrackingMode,
};
pub use error::{HostError, Result};
pub use host::DocumentHost;
pub use memory::MemoryDocument;
pub use search::compile_search;

//! Host editing surface trait

use async_trait::async_trait;

use crate::Result;
use crate::batch::{EditBatch, SyncReceipt};
use crate::document::{HeaderKind, HostInfo, Paragraph, SearchOptions, Span, TrackingMode};

/// Handle to a live document owned by a host editing surface.
///
/// All document state lives behind this handle. Reads take `&self`; anything
/// that mutates the document goes through [`DocumentHost::sync`], which takes
/// `&mut self`, so a handle cannot have two edit round-trips in flight.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Identity of the editing surface
    fn host_info(&self) -> HostInfo;

    /// Current body text, as of the last completed sync
    async fn body_text(&self) -> Result<String>;

    /// Find all matches of `pattern` in the body text, in document order.
    /// Returned spans never overlap.
    async fn search(&self, pattern: &str, options: SearchOptions) -> Result<Vec<Span>>;

    async fn section_count(&self) -> Result<usize>;

    /// Paragraphs of one header of one section
    async fn header_paragraphs(&self, section: usize, kind: HeaderKind) -> Result<Vec<Paragraph>>;

    /// Current tracking mode, or `None` when the host has no change tracking
    async fn tracking_mode(&self) -> Result<Option<TrackingMode>>;

    /// Apply every queued edit. Either the whole batch lands or none of it.
    async fn sync(&mut self, batch: EditBatch) -> Result<SyncReceipt>;
}

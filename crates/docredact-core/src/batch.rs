//! Queued edits applied together on an explicit sync
//!
//! Edits are accumulated in an [`EditBatch`] and handed to
//! [`DocumentHost::sync`](crate::DocumentHost::sync). Nothing is visible to
//! reads until the sync returns; after it returns, every queued edit is.

use crate::document::{HeaderKind, ParagraphFormat, Span, TrackingMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertLocation {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Replace a span of the body text as it was before this batch
    ReplaceText { span: Span, text: String },
    InsertHeaderParagraph {
        section: usize,
        kind: HeaderKind,
        text: String,
        location: InsertLocation,
    },
    FormatHeaderParagraph {
        section: usize,
        kind: HeaderKind,
        index: usize,
        format: ParagraphFormat,
    },
    SetTrackingMode { mode: TrackingMode },
}

#[derive(Debug, Clone, Default)]
pub struct EditBatch {
    ops: Vec<EditOp>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_text(&mut self, span: Span, text: impl Into<String>) -> &mut Self {
        self.ops.push(EditOp::ReplaceText {
            span,
            text: text.into(),
        });
        self
    }

    pub fn insert_header_paragraph(
        &mut self,
        section: usize,
        kind: HeaderKind,
        text: impl Into<String>,
        location: InsertLocation,
    ) -> &mut Self {
        self.ops.push(EditOp::InsertHeaderParagraph {
            section,
            kind,
            text: text.into(),
            location,
        });
        self
    }

    pub fn format_header_paragraph(
        &mut self,
        section: usize,
        kind: HeaderKind,
        index: usize,
        format: ParagraphFormat,
    ) -> &mut Self {
        self.ops.push(EditOp::FormatHeaderParagraph {
            section,
            kind,
            index,
            format,
        });
        self
    }

    pub fn set_tracking_mode(&mut self, mode: TrackingMode) -> &mut Self {
        self.ops.push(EditOp::SetTrackingMode { mode });
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }
}

/// Acknowledgement returned by a completed sync
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReceipt {
    pub applied: usize,
}

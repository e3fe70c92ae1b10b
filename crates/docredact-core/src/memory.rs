//! In-memory document host
//!
//! Holds the whole document in process. Used by the CLI (documents are
//! opened from disk into a `MemoryDocument`) and by tests that need a host
//! without an editing application.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::batch::{EditBatch, EditOp, InsertLocation, SyncReceipt};
use crate::document::{
    HeaderKind, HostInfo, Paragraph, Revision, SearchOptions, Section, Span, TrackingMode,
};
use crate::host::DocumentHost;
use crate::search::compile_search;
use crate::{HostError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default = "default_host_info")]
    host: HostInfo,
    body: String,
    #[serde(default)]
    sections: Vec<Section>,
    /// `None` when the document has no change tracking capability
    #[serde(default)]
    tracking: Option<TrackingMode>,
    #[serde(default)]
    revisions: Vec<Revision>,
}

fn default_host_info() -> HostInfo {
    HostInfo::word_processor("memory")
}

impl MemoryDocument {
    /// New document with one empty section and tracking available but off
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            host: default_host_info(),
            body: body.into(),
            sections: vec![Section::default()],
            tracking: Some(TrackingMode::Off),
            revisions: Vec::new(),
        }
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn without_sections(self) -> Self {
        self.with_sections(Vec::new())
    }

    /// Drop the change tracking capability entirely
    pub fn without_tracking(mut self) -> Self {
        self.tracking = None;
        self
    }

    pub fn with_tracking(mut self, mode: TrackingMode) -> Self {
        self.tracking = Some(mode);
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn tracking(&self) -> Option<TrackingMode> {
        self.tracking
    }

    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        let count = self.sections.len();
        if count == 0 {
            return Err(HostError::NoSections);
        }
        self.sections
            .get_mut(index)
            .ok_or(HostError::SectionOutOfRange { index, count })
    }

    fn section(&self, index: usize) -> Result<&Section> {
        let count = self.sections.len();
        if count == 0 {
            return Err(HostError::NoSections);
        }
        self.sections
            .get(index)
            .ok_or(HostError::SectionOutOfRange { index, count })
    }

    /// Apply ops in queue order. Replace spans refer to `original`, the body
    /// before the batch; they are all validated first and then spliced in
    /// one forward pass.
    fn apply(&mut self, original: &str, ops: Vec<EditOp>) -> Result<()> {
        let mut replacements: Vec<(Span, String)> = Vec::new();

        for op in ops {
            match op {
                EditOp::ReplaceText { span, text } => {
                    validate_span(original, span)?;
                    replacements.push((span, text));
                }
                EditOp::InsertHeaderParagraph {
                    section,
                    kind,
                    text,
                    location,
                } => {
                    let header = self.section_mut(section)?.header_mut(kind);
                    let paragraph = Paragraph::new(text);
                    match location {
                        InsertLocation::Start => header.paragraphs.insert(0, paragraph),
                        InsertLocation::End => header.paragraphs.push(paragraph),
                    }
                }
                EditOp::FormatHeaderParagraph {
                    section,
                    kind,
                    index,
                    format,
                } => {
                    let header = self.section_mut(section)?.header_mut(kind);
                    let count = header.paragraphs.len();
                    let paragraph = header
                        .paragraphs
                        .get_mut(index)
                        .ok_or(HostError::ParagraphOutOfRange { index, count })?;
                    paragraph.format = format;
                }
                EditOp::SetTrackingMode { mode } => match self.tracking {
                    Some(_) => self.tracking = Some(mode),
                    None => {
                        return Err(HostError::Unsupported("change tracking".to_string()));
                    }
                },
            }
        }

        if replacements.is_empty() {
            return Ok(());
        }

        // Stable sort: equal spans keep queue order
        let mut order: Vec<usize> = (0..replacements.len()).collect();
        order.sort_by_key(|&i| replacements[i].0);

        let mut widest: Option<Span> = None;
        for &i in &order {
            let span = replacements[i].0;
            if let Some(prev) = widest.filter(|prev| prev.overlaps(&span)) {
                return Err(HostError::OverlappingSpans {
                    first: prev.to_string(),
                    second: span.to_string(),
                });
            }
            if widest.is_none_or(|prev| span.end > prev.end) {
                widest = Some(span);
            }
        }

        if self.tracking.is_some_and(|mode| mode.is_tracking()) {
            for (span, text) in &replacements {
                self.revisions.push(Revision::new(
                    original[span.start..span.end].to_string(),
                    text.clone(),
                ));
            }
        }

        let mut body = String::with_capacity(original.len());
        let mut cursor = 0;
        for &i in &order {
            let (span, text) = &replacements[i];
            body.push_str(&original[cursor..span.start]);
            body.push_str(text);
            cursor = span.end;
        }
        body.push_str(&original[cursor..]);
        self.body = body;

        Ok(())
    }
}

fn validate_span(text: &str, span: Span) -> Result<()> {
    let valid = span.start <= span.end
        && span.end <= text.len()
        && text.is_char_boundary(span.start)
        && text.is_char_boundary(span.end);

    if valid {
        Ok(())
    } else {
        Err(HostError::InvalidSpan {
            start: span.start,
            end: span.end,
            len: text.len(),
        })
    }
}

#[async_trait]
impl DocumentHost for MemoryDocument {
    fn host_info(&self) -> HostInfo {
        self.host.clone()
    }

    async fn body_text(&self) -> Result<String> {
        Ok(self.body.clone())
    }

    async fn search(&self, pattern: &str, options: SearchOptions) -> Result<Vec<Span>> {
        let regex = compile_search(pattern, options)?;
        Ok(regex
            .find_iter(&self.body)
            .filter(|m| !m.is_empty())
            .map(|m| Span::new(m.start(), m.end()))
            .collect())
    }

    async fn section_count(&self) -> Result<usize> {
        Ok(self.sections.len())
    }

    async fn header_paragraphs(&self, section: usize, kind: HeaderKind) -> Result<Vec<Paragraph>> {
        Ok(self.section(section)?.header(kind).paragraphs.clone())
    }

    async fn tracking_mode(&self) -> Result<Option<TrackingMode>> {
        Ok(self.tracking)
    }

    async fn sync(&mut self, batch: EditBatch) -> Result<SyncReceipt> {
        let applied = batch.len();
        let mut staged = self.clone();
        staged.apply(&self.body, batch.into_ops())?;
        *self = staged;
        Ok(SyncReceipt { applied })
    }
}

//! Document domain model shared by every host

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Half-open byte range `[start, end)` into the body text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Matching options accepted by a host search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub match_case: bool,
    #[serde(default)]
    pub match_whole_word: bool,
    #[serde(default)]
    pub ignore_punct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderKind {
    Primary,
    FirstPage,
    EvenPages,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Centered,
    Right,
    Justified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    #[serde(default)]
    pub bold: bool,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Default for ParagraphFormat {
    fn default() -> Self {
        Self {
            bold: false,
            size: default_size(),
            color: default_color(),
            alignment: Alignment::Left,
        }
    }
}

fn default_size() -> f32 {
    11.0
}

fn default_color() -> String {
    "black".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub format: ParagraphFormat,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ParagraphFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// A document section with its headers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub primary: Header,
    #[serde(default)]
    pub first_page: Header,
    #[serde(default)]
    pub even_pages: Header,
}

impl Section {
    pub fn header(&self, kind: HeaderKind) -> &Header {
        match kind {
            HeaderKind::Primary => &self.primary,
            HeaderKind::FirstPage => &self.first_page,
            HeaderKind::EvenPages => &self.even_pages,
        }
    }

    pub fn header_mut(&mut self, kind: HeaderKind) -> &mut Header {
        match kind {
            HeaderKind::Primary => &mut self.primary,
            HeaderKind::FirstPage => &mut self.first_page,
            HeaderKind::EvenPages => &mut self.even_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    #[default]
    Off,
    TrackAll,
    TrackMineOnly,
}

impl TrackingMode {
    pub fn is_tracking(&self) -> bool {
        !matches!(self, TrackingMode::Off)
    }
}

/// A text edit recorded while change tracking is on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: String,
    pub original: String,
    pub replacement: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl Revision {
    pub fn new(original: String, replacement: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original,
            replacement,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    WordProcessor,
    Spreadsheet,
    Presentation,
    Mail,
}

/// Identity of the editing surface, reported once per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub kind: HostKind,
    pub name: String,
}

impl HostInfo {
    pub fn word_processor(name: impl Into<String>) -> Self {
        Self {
            kind: HostKind::WordProcessor,
            name: name.into(),
        }
    }
}

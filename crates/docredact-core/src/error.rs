use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Document has no sections")]
    NoSections,

    #[error("Section {index} out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },

    #[error("Header paragraph {index} out of range ({count} paragraphs)")]
    ParagraphOutOfRange { index: usize, count: usize },

    #[error("Invalid span {start}..{end} for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("Overlapping spans in batch: {first} and {second}")]
    OverlappingSpans { first: String, second: String },

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unsupported by host: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;

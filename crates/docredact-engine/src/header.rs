//! Confidential header stamper

use docredact_core::{
    Alignment, DocumentHost, EditBatch, HeaderKind, HostError, InsertLocation, ParagraphFormat,
};
use tracing::warn;

use crate::outcome::StepOutcome;

pub const CONFIDENTIAL_HEADER: &str = "CONFIDENTIAL DOCUMENT";

/// Line inserted at the top of the first section's primary header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStamp {
    pub text: String,
    pub format: ParagraphFormat,
}

impl Default for HeaderStamp {
    fn default() -> Self {
        Self {
            text: CONFIDENTIAL_HEADER.to_string(),
            format: ParagraphFormat {
                bold: true,
                size: 14.0,
                color: "red".to_string(),
                alignment: Alignment::Centered,
            },
        }
    }
}

/// Best effort: any failure degrades, nothing is rolled back
pub async fn stamp_header(host: &mut dyn DocumentHost, stamp: &HeaderStamp) -> StepOutcome {
    match try_stamp(host, stamp).await {
        Ok(()) => StepOutcome::Completed(()),
        Err(e) => {
            warn!(error = %e, "Could not add header");
            StepOutcome::Degraded {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_stamp(host: &mut dyn DocumentHost, stamp: &HeaderStamp) -> Result<(), HostError> {
    if host.section_count().await? == 0 {
        return Err(HostError::NoSections);
    }

    let mut batch = EditBatch::new();
    batch.insert_header_paragraph(0, HeaderKind::Primary, &stamp.text, InsertLocation::Start);
    host.sync(batch).await?;

    let paragraphs = host.header_paragraphs(0, HeaderKind::Primary).await?;
    if paragraphs.is_empty() {
        return Err(HostError::ParagraphOutOfRange { index: 0, count: 0 });
    }

    let mut batch = EditBatch::new();
    batch.format_header_paragraph(0, HeaderKind::Primary, 0, stamp.format.clone());
    host.sync(batch).await?;

    Ok(())
}

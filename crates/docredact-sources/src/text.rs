use async_trait::async_trait;
use docredact_core::{HostError, HostInfo, MemoryDocument, Result};
use std::path::Path;
use tracing::warn;

use crate::handler::{DocumentHandler, has_extension};

/// Plain text files: the body only, one empty section, tracking off
pub struct TextDocumentHandler;

#[async_trait]
impl DocumentHandler for TextDocumentHandler {
    async fn open(&self, path: &Path) -> Result<MemoryDocument> {
        let body = tokio::fs::read_to_string(path).await.map_err(|e| {
            HostError::Other(anyhow::anyhow!(
                "Failed to read document {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(MemoryDocument::new(body).with_host(HostInfo::word_processor("text-file")))
    }

    async fn save(&self, document: &MemoryDocument, path: &Path) -> Result<()> {
        let dropped = self.discarded(document);
        if !dropped.is_empty() {
            warn!(
                "{} is plain text; {} not saved",
                path.display(),
                dropped.join(" and ")
            );
        }

        tokio::fs::write(path, document.body()).await?;
        Ok(())
    }

    fn can_handle(&self, path: &Path) -> bool {
        has_extension(path, &["txt", "text", "md"])
    }

    fn discarded(&self, document: &MemoryDocument) -> Vec<&'static str> {
        let mut dropped = Vec::new();
        let has_header = document.sections().iter().any(|s| {
            [&s.primary, &s.first_page, &s.even_pages]
                .iter()
                .any(|h| !h.paragraphs.is_empty())
        });
        if has_header {
            dropped.push("header");
        }
        let tracking = document.tracking().is_some_and(|mode| mode.is_tracking());
        if tracking || !document.revisions().is_empty() {
            dropped.push("change tracking");
        }
        dropped
    }
}

use async_trait::async_trait;
use docredact_core::{HostError, MemoryDocument, Result};
use std::path::Path;

use crate::handler::{DocumentHandler, has_extension};

/// Full document snapshots: body, sections, tracking mode and revisions
pub struct JsonDocumentHandler;

#[async_trait]
impl DocumentHandler for JsonDocumentHandler {
    async fn open(&self, path: &Path) -> Result<MemoryDocument> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            HostError::Other(anyhow::anyhow!(
                "Failed to read document {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, document: &MemoryDocument, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(document)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    fn can_handle(&self, path: &Path) -> bool {
        has_extension(path, &["json"])
    }
}

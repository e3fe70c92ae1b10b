//! Document file handler trait

use async_trait::async_trait;
use docredact_core::{HostError, MemoryDocument, Result};
use std::path::Path;

use crate::json::JsonDocumentHandler;
use crate::text::TextDocumentHandler;

/// Opens a document file into an in-memory host and writes it back
#[async_trait]
pub trait DocumentHandler: Send + Sync {
    /// Load a document from disk
    async fn open(&self, path: &Path) -> Result<MemoryDocument>;

    /// Persist a document to disk in this handler's format
    async fn save(&self, document: &MemoryDocument, path: &Path) -> Result<()>;

    /// Check if this handler can handle the given path
    fn can_handle(&self, path: &Path) -> bool;

    /// Parts of `document` this format cannot store and `save` drops
    fn discarded(&self, _document: &MemoryDocument) -> Vec<&'static str> {
        Vec::new()
    }
}

pub struct DocumentHandlerRegistry {
    handlers: Vec<Box<dyn DocumentHandler>>,
}

impl DocumentHandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(JsonDocumentHandler),
                Box::new(TextDocumentHandler),
            ],
        }
    }

    fn handler_for(&self, path: &Path) -> Result<&dyn DocumentHandler> {
        self.handlers
            .iter()
            .find(|h| h.can_handle(path))
            .map(|h| &**h)
            .ok_or_else(|| {
                HostError::Unsupported(format!("document format of {}", path.display()))
            })
    }

    pub async fn open(&self, path: &Path) -> Result<MemoryDocument> {
        self.handler_for(path)?.open(path).await
    }

    pub async fn save(&self, document: &MemoryDocument, path: &Path) -> Result<()> {
        self.handler_for(path)?.save(document, path).await
    }

    pub fn discarded(
        &self,
        document: &MemoryDocument,
        path: &Path,
    ) -> Result<Vec<&'static str>> {
        Ok(self.handler_for(path)?.discarded(document))
    }
}

impl Default for DocumentHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

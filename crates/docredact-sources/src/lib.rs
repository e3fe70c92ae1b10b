pub mod handler;
pub mod json;
pub mod text;

pub use handler::{DocumentHandler, DocumentHandlerRegistry};
pub use json::JsonDocumentHandler;
pub use text::TextDocumentHandler;

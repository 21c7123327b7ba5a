//! Document store errors.

use thiserror::Error;

use crate::document::DocumentKind;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The requested path failed validation before any read was
    /// attempted.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// No document exists at the requested path. The message points the
    /// caller at the listing tool so a model can recover.
    #[error("No {kind} found at '{path}'. Call {list}() to see what is available.",
        kind = .0.label(), path = .1, list = .0.list_tool())]
    NotFound(DocumentKind, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

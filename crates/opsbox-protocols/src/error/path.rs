//! Path resolution errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The candidate path resolves outside the store root. Raised before
    /// any filesystem read against the candidate.
    #[error("Path '{0}' escapes the document root")]
    Traversal(String),
}

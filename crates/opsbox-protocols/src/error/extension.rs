//! Extension lifecycle errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Initialization failed: {0}")]
    InitializationFailed(String),
}

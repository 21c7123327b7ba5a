//! Expression evaluation errors.

use thiserror::Error;

/// Errors surfaced by the sandboxed expression evaluator.
///
/// Each variant renders as a distinct human-readable message; the
/// calculate tool forwards it to the model as text so the model can
/// correct its input and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Empty expression")]
    Empty,

    #[error("Syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("Unknown name or function: '{0}'")]
    UnknownName(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    Domain(String),
}

//! Error types for the opsbox protocol layer.

mod document;
mod eval;
mod extension;
mod path;
mod tool;

pub use document::*;
pub use eval::*;
pub use extension::*;
pub use path::*;
pub use tool::*;

//! Tool protocol definitions.
//!
//! Tools are the boundary the conversation agent calls into.

mod traits;
mod definition;
mod context;
mod result;

pub use traits::*;
pub use definition::*;
pub use context::*;
pub use result::*;

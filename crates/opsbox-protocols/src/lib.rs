//! # Opsbox Protocols
//!
//! Protocol definitions (traits and wire types) for the opsbox agent
//! tool layer. Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for mountable tool packs
//! - [`Tool`] - Trait for tool implementations
//! - [`ToolRegistryAccess`] / [`ServiceRegistryAccess`] - Registry handles
//!   passed to extensions during initialization

pub mod document;
pub mod error;
pub mod extension;
pub mod service;
pub mod tool;
pub mod types;

// Re-export core traits
pub use document::{Document, DocumentKind, DocumentSummary};
pub use extension::{
    Extension, ExtensionContext, ExtensionManifest, Provides, ServiceRegistryAccess,
    ToolRegistryAccess,
};
pub use service::ApiService;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use error::{DocumentError, EvalError, ExtensionError, PathError, ToolError};
pub use types::*;

//! Extension trait definition.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ExtensionContext, ExtensionManifest};
use crate::error::ExtensionError;
use crate::service::ApiService;

/// Core trait for extensions.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Initialize the extension with the given context.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;

    /// Shutdown the extension.
    async fn shutdown(&self) -> Result<(), ExtensionError> {
        Ok(())
    }
}

/// Trait for accessing the tool registry from extensions.
pub trait ToolRegistryAccess: Send + Sync {
    /// Register a tool.
    fn register_tool(&self, tool: Arc<dyn crate::tool::Tool>) -> Result<(), ExtensionError>;

    /// Unregister a tool.
    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError>;
}

/// Trait for accessing the external-service registry from extensions.
pub trait ServiceRegistryAccess: Send + Sync {
    /// Register a service descriptor. The first registration of a name
    /// wins; later calls are no-ops and return `false`.
    fn register_service(&self, service: ApiService) -> bool;

    /// Look up a registered service descriptor.
    fn get_service(&self, name: &str) -> Option<ApiService>;
}

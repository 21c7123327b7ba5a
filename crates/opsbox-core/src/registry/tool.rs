//! Tool registry for managing available tools.

use std::sync::Arc;

use dashmap::DashMap;

use opsbox_protocols::error::ExtensionError;
use opsbox_protocols::extension::ToolRegistryAccess;
use opsbox_protocols::tool::{Tool, ToolDefinition};

/// Registry of the tools exposed to the agent.
pub struct ToolRegistry {
    tools: DashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// Returns an error if a tool with the same id is already
    /// registered.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        let id = tool.definition().id.clone();
        match self.tools.entry(id) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                Err(ExtensionError::AlreadyRegistered(entry.key().clone()))
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(tool);
                Ok(())
            }
        }
    }

    /// Unregister a tool by id.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.tools
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(id).map(|entry| entry.value().clone())
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|entry| entry.value().definition().clone())
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.register(tool)
    }

    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError> {
        self.unregister(tool_id)
    }
}

//! Toolbox extension definition.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use opsbox_core::docs::DocumentStore;
use opsbox_protocols::document::DocumentKind;
use opsbox_protocols::error::ExtensionError;
use opsbox_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use opsbox_protocols::service::ApiService;
use opsbox_protocols::types::Version;

use crate::{CalculateTool, DocListTool, DocReadTool};

/// Default API service consumed by the host's pass-through network
/// tools. Replace with your own endpoint for production use.
const API_SERVICE_NAME: &str = "devops";
const API_BASE_URL: &str = "https://my-json-server.typicode.com/juanje/devops-mock-api";
const API_TIMEOUT_SECS: u64 = 10;
const API_MAX_RETRIES: u32 = 2;

/// Toolbox extension providing the agent's callable tools.
///
/// Registers five tools:
/// - `calculate`: sandboxed arithmetic
/// - `list_skills` / `read_skill`: task instructions
/// - `list_facts` / `read_fact`: reference information
///
/// Initialization also registers the external API service descriptor.
/// The service registry is first-registration-wins, so constructing and
/// initializing any number of toolboxes registers the service once.
pub struct ToolboxExtension {
    manifest: ExtensionManifest,
    skills: Arc<DocumentStore>,
    facts: Arc<DocumentStore>,
}

impl ToolboxExtension {
    pub fn new(skills_dir: impl Into<PathBuf>, facts_dir: impl Into<PathBuf>) -> Self {
        let mut manifest =
            ExtensionManifest::new("agent-toolbox", "Toolbox Agent Tools", Version::new(0, 1, 0));
        manifest.description =
            "Calculator and skill/fact document tools for the toolbox agent".to_string();
        manifest.provides = Provides {
            tools: vec![
                "calculate".to_string(),
                "list_skills".to_string(),
                "read_skill".to_string(),
                "list_facts".to_string(),
                "read_fact".to_string(),
            ],
            services: vec![API_SERVICE_NAME.to_string()],
        };

        Self {
            manifest,
            skills: Arc::new(DocumentStore::new(skills_dir, DocumentKind::Skill)),
            facts: Arc::new(DocumentStore::new(facts_dir, DocumentKind::Fact)),
        }
    }
}

#[async_trait]
impl Extension for ToolboxExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let registered = ctx.service_registry.register_service(ApiService::new(
            API_SERVICE_NAME,
            API_BASE_URL,
            API_TIMEOUT_SECS,
            API_MAX_RETRIES,
        ));
        if registered {
            tracing::info!(service = API_SERVICE_NAME, "registered API service");
        }

        ctx.tool_registry
            .register_tool(Arc::new(CalculateTool::new()))?;
        ctx.tool_registry
            .register_tool(Arc::new(DocListTool::new(self.skills.clone())))?;
        ctx.tool_registry
            .register_tool(Arc::new(DocReadTool::new(self.skills.clone())))?;
        ctx.tool_registry
            .register_tool(Arc::new(DocListTool::new(self.facts.clone())))?;
        ctx.tool_registry
            .register_tool(Arc::new(DocReadTool::new(self.facts.clone())))?;

        tracing::info!(
            "Toolbox tools registered: calculate, list_skills, read_skill, list_facts, read_fact"
        );
        Ok(())
    }
}

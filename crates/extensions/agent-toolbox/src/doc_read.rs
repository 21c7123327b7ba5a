//! Read tools - fetch one skill or fact by path.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use opsbox_core::docs::DocumentStore;
use opsbox_protocols::document::DocumentKind;
use opsbox_protocols::error::ToolError;
use opsbox_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

#[derive(Debug, Deserialize)]
struct DocReadParams {
    /// Path relative to the store root, as returned by the listing
    /// tool.
    path: String,
}

/// Tool for reading one document's body.
///
/// One implementation serves both `read_skill` and `read_fact`. Paths
/// are validated against the store root before anything is read; a
/// traversal attempt or a missing document comes back as an error
/// string the model can act on.
pub struct DocReadTool {
    definition: ToolDefinition,
    store: Arc<DocumentStore>,
}

impl DocReadTool {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        let kind = store.kind();
        let description = match kind {
            DocumentKind::Skill => {
                "Get the detailed instructions for a specific task. Use this after finding a \
                 relevant skill with list_skills, passing the listed path (e.g. \
                 'deploy-service.md' or 'check-service-health/api-gateway.md')."
            }
            DocumentKind::Fact => {
                "Get reference information about a specific topic. Use this after finding a \
                 relevant fact with list_facts, passing the listed path (e.g. \
                 'api-endpoints.md' or 'services/database-info.md')."
            }
        };

        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": format!("The path from {}()", kind.list_tool())
                }
            },
            "required": ["path"]
        });

        Self {
            definition: ToolDefinition::new(
                kind.read_tool(),
                match kind {
                    DocumentKind::Skill => "Read Skill",
                    DocumentKind::Fact => "Read Fact",
                },
                description,
            )
            .with_parameters_schema(schema),
            store,
        }
    }
}

#[async_trait]
impl Tool for DocReadTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: DocReadParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        match self.store.read(&params.path) {
            Ok(body) => Ok(ToolResult::success(body)),
            Err(e) => Ok(ToolResult::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn ctx() -> ToolContext {
        ToolContext::new("test", PathBuf::from("."))
    }

    fn seeded_tool(kind: DocumentKind) -> (TempDir, DocReadTool) {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("topic.md"),
            "---\nname: topic\ndescription: d\n---\nThe body only.",
        )
        .unwrap();
        let store = Arc::new(DocumentStore::new(dir.path(), kind));
        (dir, DocReadTool::new(store))
    }

    #[tokio::test]
    async fn test_read_returns_body_without_header() {
        let (_guard, tool) = seeded_tool(DocumentKind::Skill);
        assert_eq!(tool.definition().id, "read_skill");

        let result = tool
            .execute(serde_json::json!({"path": "topic.md"}), ctx())
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.content, "The body only.");
        assert!(!result.content.contains("---"));
    }

    #[tokio::test]
    async fn test_missing_document_suggests_listing() {
        let (_guard, tool) = seeded_tool(DocumentKind::Skill);
        let result = tool
            .execute(serde_json::json!({"path": "missing.md"}), ctx())
            .await
            .unwrap();
        assert!(!result.success);
        let message = result.error.unwrap();
        assert!(message.contains("skill"));
        assert!(message.contains("list_skills"));
    }

    #[tokio::test]
    async fn test_traversal_attempt_is_refused() {
        let (_guard, tool) = seeded_tool(DocumentKind::Fact);
        assert_eq!(tool.definition().id, "read_fact");

        let result = tool
            .execute(serde_json::json!({"path": "../../etc/passwd"}), ctx())
            .await
            .unwrap();
        assert!(!result.success);
        let message = result.error.unwrap();
        assert!(message.contains("Invalid path"));
        // The refusal does not reveal anything about the target.
        assert!(!message.contains("No such file"));
    }

    #[tokio::test]
    async fn test_missing_parameter_is_contract_violation() {
        let (_guard, tool) = seeded_tool(DocumentKind::Skill);
        let result = tool.execute(serde_json::json!({}), ctx()).await;
        assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    }
}

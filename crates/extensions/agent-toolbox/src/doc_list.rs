//! Listing tools - discover available skills or facts.

use std::sync::Arc;

use async_trait::async_trait;

use opsbox_core::docs::DocumentStore;
use opsbox_protocols::document::DocumentKind;
use opsbox_protocols::error::ToolError;
use opsbox_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// Tool for listing the documents in a store.
///
/// One implementation serves both `list_skills` and `list_facts`; the
/// store's kind decides the tool id and wording.
pub struct DocListTool {
    definition: ToolDefinition,
    store: Arc<DocumentStore>,
}

impl DocListTool {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        let kind = store.kind();
        let description = match kind {
            DocumentKind::Skill => {
                "List available skills that describe how to perform specific tasks. Use this \
                 to discover what task instructions exist before reading one with read_skill. \
                 Skills may be organized hierarchically; start with general ones."
            }
            DocumentKind::Fact => {
                "List available facts that provide contextual information on specific topics. \
                 Use this to discover what background knowledge exists before reading one \
                 with read_fact."
            }
        };

        Self {
            definition: ToolDefinition::new(
                kind.list_tool(),
                match kind {
                    DocumentKind::Skill => "List Skills",
                    DocumentKind::Fact => "List Facts",
                },
                description,
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {}
            })),
            store,
        }
    }
}

#[async_trait]
impl Tool for DocListTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let kind = self.store.kind();
        let entries = self.store.list();

        if entries.is_empty() {
            return Ok(ToolResult::success(format!(
                "No {} available.",
                kind.plural()
            )));
        }

        let mut output = format!("Found {} available {}:\n\n", entries.len(), kind.plural());
        for entry in &entries {
            output.push_str(&format!("## {}\n", entry.name));
            if !entry.description.is_empty() {
                output.push_str(&format!("- **Description**: {}\n", entry.description));
            }
            output.push_str(&format!("- **Path**: `{}`\n\n", entry.path));
        }
        output.push_str(&format!(
            "Call {} with a path to get the full content.",
            kind.read_tool()
        ));

        let records = serde_json::to_value(&entries)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success_json(output, records))
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

    fn seeded_store(kind: DocumentKind) -> (TempDir, Arc<DocumentStore>) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("deploy")).unwrap();
        std::fs::write(
            dir.path().join("deploy/web.md"),
            "---\nname: deploy-web\ndescription: Deploy the web tier\n---\nSteps.",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("health.md"),
            "---\nname: check-health\n---\nProbe endpoints.",
        )
        .unwrap();
        std::fs::write(dir.path().join("scratch.md"), "no frontmatter").unwrap();
        let store = Arc::new(DocumentStore::new(dir.path(), kind));
        (dir, store)
    }

    #[tokio::test]
    async fn test_listing_content_and_records() {
        let (_guard, store) = seeded_store(DocumentKind::Skill);
        let tool = DocListTool::new(store);
        assert_eq!(tool.definition().id, "list_skills");

        let result = tool.execute(serde_json::json!({}), ctx()).await.unwrap();
        assert!(result.success);
        assert!(result.content.contains("Found 2 available skills"));
        assert!(result.content.contains("deploy-web"));
        assert!(result.content.contains("`deploy/web.md`"));
        assert!(result.content.contains("read_skill"));

        let records = result.structured_output.unwrap();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);
        // Sorted by path: deploy/web.md before health.md.
        assert_eq!(records[0]["name"], "deploy-web");
        assert_eq!(records[0]["description"], "Deploy the web tier");
        assert_eq!(records[0]["path"], "deploy/web.md");
        assert_eq!(records[1]["name"], "check-health");
        assert_eq!(records[1]["description"], "");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(DocumentStore::new(dir.path(), DocumentKind::Fact));
        let tool = DocListTool::new(store);
        assert_eq!(tool.definition().id, "list_facts");

        let result = tool.execute(serde_json::json!({}), ctx()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "No facts available.");
        assert!(result.structured_output.is_none());
    }
}

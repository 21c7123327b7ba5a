//! Tool execution context.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Session ID for the current conversation.
    pub session_id: String,

    /// Correlation ID for tracing.
    pub correlation_id: String,

    /// Working directory for file operations.
    pub work_dir: std::path::PathBuf,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(session_id: impl Into<String>, work_dir: std::path::PathBuf) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            work_dir,
            data: HashMap::new(),
        }
    }

    /// Get a value from the context data.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the context data.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.into(), v);
        }
    }
}

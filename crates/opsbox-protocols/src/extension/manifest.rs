//! Extension manifest types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Metadata, Version};

/// Extension manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    pub id: String,
    pub name: String,
    pub version: Version,
    pub description: String,
    #[serde(default)]
    pub provides: Provides,
    #[serde(default)]
    pub metadata: Metadata,
}

impl ExtensionManifest {
    /// Create a new extension manifest.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: Version) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version,
            description: String::new(),
            provides: Provides::default(),
            metadata: HashMap::new(),
        }
    }
}

/// What an extension provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provides {
    #[serde(default)]
    pub tools: Vec<String>,

    #[serde(default)]
    pub services: Vec<String>,
}

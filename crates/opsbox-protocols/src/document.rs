//! Document types for the skill and fact stores.
//!
//! Skills describe how to perform a task; facts carry reference
//! information. Both are markdown files with an optional YAML
//! frontmatter header, and both stores share one implementation.

use serde::{Deserialize, Serialize};
use serde_yml::Mapping;
use std::path::PathBuf;

/// Which corpus a store serves. The two stores behave identically; the
/// kind only decides the wording of diagnostics and the bound tool ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Skill,
    Fact,
}

impl DocumentKind {
    /// Singular label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Fact => "fact",
        }
    }

    /// Plural label used in listings.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Skill => "skills",
            Self::Fact => "facts",
        }
    }

    /// Id of the listing tool bound to this kind.
    pub fn list_tool(&self) -> &'static str {
        match self {
            Self::Skill => "list_skills",
            Self::Fact => "list_facts",
        }
    }

    /// Id of the read tool bound to this kind.
    pub fn read_tool(&self) -> &'static str {
        match self {
            Self::Skill => "read_skill",
            Self::Fact => "read_fact",
        }
    }
}

/// One entry in a store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Name declared in the document's frontmatter.
    pub name: String,

    /// Description from the frontmatter; empty when absent.
    #[serde(default)]
    pub description: String,

    /// Path relative to the store root, the key for the read tools.
    pub path: String,
}

/// A parsed document: its full frontmatter header and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Path relative to the store root.
    pub relative_path: PathBuf,

    /// Decoded frontmatter header; empty when absent or malformed.
    pub frontmatter: Mapping,

    /// Content with the header stripped.
    pub body: String,
}

impl Document {
    /// The `name` frontmatter field, rendered to text. Documents without
    /// one do not appear in listings.
    pub fn name(&self) -> Option<String> {
        self.scalar("name")
    }

    /// The `description` frontmatter field, empty when absent.
    pub fn description(&self) -> String {
        self.scalar("description").unwrap_or_default()
    }

    /// Listing entry for this document, if it declares a name.
    pub fn summary(&self) -> Option<DocumentSummary> {
        Some(DocumentSummary {
            name: self.name()?,
            description: self.description(),
            path: self.relative_path.to_string_lossy().into_owned(),
        })
    }

    /// Look up a scalar header field as text. Sequences and nested
    /// mappings are treated as absent.
    fn scalar(&self, key: &str) -> Option<String> {
        match self.frontmatter.get(key)? {
            serde_yml::Value::String(s) => Some(s.clone()),
            serde_yml::Value::Number(n) => Some(n.to_string()),
            serde_yml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

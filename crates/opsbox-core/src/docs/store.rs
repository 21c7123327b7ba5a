//! Document store: discovery and retrieval.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use opsbox_protocols::document::{Document, DocumentKind, DocumentSummary};
use opsbox_protocols::error::{DocumentError, PathError};

use super::{frontmatter, resolve};

/// File extension documents must carry.
const DOCUMENT_EXTENSION: &str = "md";

/// A read-only, root-scoped document collection.
///
/// Discovery re-walks the directory on every call, so externally
/// authored documents appear without any reload step. Every path
/// accepted from a caller goes through [`resolve::resolve`] before any
/// read.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
    kind: DocumentKind,
}

impl DocumentStore {
    /// Create a store over `root`.
    pub fn new(root: impl Into<PathBuf>, kind: DocumentKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// List every document under the root that declares a `name` in its
    /// frontmatter, ordered by relative path.
    ///
    /// Files that cannot be read or carry no usable header are skipped;
    /// one broken document must not hide the rest.
    pub fn list(&self) -> Vec<DocumentSummary> {
        let mut entries = Vec::new();

        if !self.root.exists() {
            debug!(root = %self.root.display(), "{} directory does not exist", self.kind.label());
            return entries;
        }

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(OsStr::to_str) != Some(DOCUMENT_EXTENSION) {
                continue;
            }

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable document");
                    continue;
                }
            };

            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };

            let (header, body) = frontmatter::parse(&content);
            let document = Document {
                relative_path: relative.to_path_buf(),
                frontmatter: header,
                body,
            };
            match document.summary() {
                Some(summary) => entries.push(summary),
                None => {
                    debug!(path = %path.display(), "document has no name, not listing");
                }
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    /// Read a document's body by its root-relative path.
    pub fn read(&self, path: &str) -> Result<String, DocumentError> {
        Ok(self.load(path)?.body)
    }

    /// Load a document - full frontmatter and body - by its
    /// root-relative path.
    pub fn load(&self, path: &str) -> Result<Document, DocumentError> {
        // A store whose root is gone has no documents; that is the same
        // answer as a missing file.
        let root = self
            .root
            .canonicalize()
            .map_err(|_| self.not_found(path))?;

        let resolved = resolve::resolve(&root, path).map_err(|PathError::Traversal(p)| {
            DocumentError::InvalidPath(format!(
                "'{}' points outside the {} directory",
                p,
                self.kind.plural()
            ))
        })?;

        if !resolved.is_file() {
            return Err(self.not_found(path));
        }

        let content = std::fs::read_to_string(&resolved)?;
        let (header, body) = frontmatter::parse(&content);
        let relative = resolved
            .strip_prefix(&root)
            .unwrap_or_else(|_| Path::new(path))
            .to_path_buf();

        Ok(Document {
            relative_path: relative,
            frontmatter: header,
            body,
        })
    }

    fn not_found(&self, path: &str) -> DocumentError {
        DocumentError::NotFound(self.kind, path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)], kind: DocumentKind) -> (TempDir, DocumentStore) {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(full, content).unwrap();
        }
        let store = DocumentStore::new(dir.path(), kind);
        (dir, store)
    }

    #[test]
    fn test_list_and_read_round_trip() {
        let (_guard, store) = store_with(
            &[(
                "deploy.md",
                "---\nname: deploy-service\ndescription: How to deploy\n---\nStep one.\nStep two.",
            )],
            DocumentKind::Skill,
        );

        let entries = store.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "deploy-service");
        assert_eq!(entries[0].description, "How to deploy");
        assert_eq!(entries[0].path, "deploy.md");

        let body = store.read("deploy.md").unwrap();
        assert_eq!(body, "Step one.\nStep two.");
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let (_guard, store) =
            store_with(&[("a.md", "---\nname: bare\n---\nbody")], DocumentKind::Skill);
        let entries = store.list();
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_document_without_frontmatter_not_listed_but_readable() {
        let raw = "# Plain notes\n\nNo header at all.";
        let (_guard, store) = store_with(&[("plain.md", raw)], DocumentKind::Skill);

        assert!(store.list().is_empty());
        assert_eq!(store.read("plain.md").unwrap(), raw);
    }

    #[test]
    fn test_malformed_header_not_listed_but_readable() {
        let raw = "---\nname: [unclosed\n---\nbody";
        let (_guard, store) = store_with(&[("broken.md", raw)], DocumentKind::Skill);

        assert!(store.list().is_empty());
        assert_eq!(store.read("broken.md").unwrap(), raw);
    }

    #[test]
    fn test_nested_paths_and_deterministic_order() {
        let (_guard, store) = store_with(
            &[
                ("z/later.md", "---\nname: z-doc\n---\nz"),
                ("a/first.md", "---\nname: a-doc\n---\na"),
                ("middle.md", "---\nname: m-doc\n---\nm"),
            ],
            DocumentKind::Fact,
        );

        let paths: Vec<String> = store.list().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["a/first.md", "middle.md", "z/later.md"]);

        assert_eq!(store.read("a/first.md").unwrap(), "a");
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let (_guard, store) = store_with(
            &[
                ("doc.md", "---\nname: doc\n---\nx"),
                ("notes.txt", "---\nname: txt\n---\nx"),
                ("script.sh", "echo hi"),
            ],
            DocumentKind::Skill,
        );
        let entries = store.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "doc");
    }

    #[test]
    fn test_read_missing_mentions_kind_and_listing_tool() {
        let (_guard, store) = store_with(&[], DocumentKind::Skill);
        let err = store.read("missing.md").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("skill"));
        assert!(message.contains("missing.md"));
        assert!(message.contains("list_skills"));
    }

    #[test]
    fn test_fact_store_uses_fact_wording() {
        let (_guard, store) = store_with(&[], DocumentKind::Fact);
        let err = store.read("nope.md").unwrap_err();
        assert!(err.to_string().contains("list_facts"));

        let err = store.read("../escape.md").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPath(_)));
        assert!(err.to_string().contains("facts"));
    }

    #[test]
    fn test_traversal_is_invalid_path_not_not_found() {
        let (_guard, store) = store_with(&[("a.md", "x")], DocumentKind::Skill);
        let err = store.read("../../etc/passwd").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPath(_)));
    }

    #[test]
    fn test_dotdot_within_root_reads() {
        let (_guard, store) = store_with(
            &[("b.md", "---\nname: b\n---\ncontent")],
            DocumentKind::Skill,
        );
        assert_eq!(store.read("a/../b.md").unwrap(), "content");
    }

    #[test]
    fn test_missing_root_lists_empty_and_reads_not_found() {
        let store = DocumentStore::new("/nonexistent/opsbox-test-root", DocumentKind::Skill);
        assert!(store.list().is_empty());
        assert!(matches!(
            store.read("anything.md").unwrap_err(),
            DocumentError::NotFound(..)
        ));
    }

    #[test]
    fn test_load_returns_full_frontmatter() {
        let (_guard, store) = store_with(
            &[("a.md", "---\nname: a\nowner: team-x\n---\nbody")],
            DocumentKind::Skill,
        );
        let document = store.load("a.md").unwrap();
        assert_eq!(document.name().as_deref(), Some("a"));
        assert_eq!(
            document
                .frontmatter
                .get("owner")
                .and_then(serde_yml::Value::as_str),
            Some("team-x")
        );
        assert_eq!(document.body, "body");
        assert_eq!(document.relative_path, PathBuf::from("a.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_out_of_root_is_invalid_path() {
        let outside = TempDir::new().unwrap();
        std::fs::write(outside.path().join("secret.md"), "secret").unwrap();

        let (_guard, store) = store_with(&[], DocumentKind::Skill);
        std::os::unix::fs::symlink(
            outside.path().join("secret.md"),
            store.root().join("link.md"),
        )
        .unwrap();

        assert!(matches!(
            store.read("link.md").unwrap_err(),
            DocumentError::InvalidPath(_)
        ));
    }
}

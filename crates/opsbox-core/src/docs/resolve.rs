//! Traversal-safe path resolution.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use opsbox_protocols::error::PathError;

/// Resolve a caller-supplied relative path against a canonical root,
/// refusing anything that lands outside it.
///
/// The candidate is normalized lexically before any filesystem access:
/// `.` components are dropped, `..` pops, and popping past the root or
/// supplying an absolute path fails immediately. The surviving path is
/// then canonicalized so a symlink inside the root that points outside
/// it is also refused. A candidate that does not exist resolves to its
/// lexical form - existence is the caller's concern, and reporting it
/// here would let a probe distinguish out-of-root paths that exist from
/// ones that do not.
pub fn resolve(root: &Path, candidate: &str) -> Result<PathBuf, PathError> {
    let traversal = || PathError::Traversal(candidate.to_string());

    let mut parts: Vec<&OsStr> = Vec::new();
    for component in Path::new(candidate).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(traversal());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(traversal()),
        }
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(&parts);

    match resolved.canonicalize() {
        Ok(real) if real.starts_with(root) => Ok(real),
        Ok(_) => Err(traversal()),
        Err(_) => Ok(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let canonical = dir.path().canonicalize().unwrap();
        (dir, canonical)
    }

    #[test]
    fn test_plain_relative_path() {
        let (_guard, root) = root();
        std::fs::write(root.join("b.md"), "x").unwrap();
        let resolved = resolve(&root, "b.md").unwrap();
        assert_eq!(resolved, root.join("b.md"));
    }

    #[test]
    fn test_dotdot_within_root_is_fine() {
        let (_guard, root) = root();
        std::fs::write(root.join("b.md"), "x").unwrap();
        let resolved = resolve(&root, "a/../b.md").unwrap();
        assert_eq!(resolved, root.join("b.md"));
    }

    #[test]
    fn test_traversal_rejected_without_touching_fs() {
        let (_guard, root) = root();
        assert_eq!(
            resolve(&root, "../../etc/passwd").unwrap_err(),
            PathError::Traversal("../../etc/passwd".to_string())
        );
        assert_eq!(
            resolve(&root, "..").unwrap_err(),
            PathError::Traversal("..".to_string())
        );
        assert_eq!(
            resolve(&root, "a/../../b.md").unwrap_err(),
            PathError::Traversal("a/../../b.md".to_string())
        );
    }

    #[test]
    fn test_absolute_candidate_rejected() {
        let (_guard, root) = root();
        assert!(matches!(
            resolve(&root, "/etc/passwd"),
            Err(PathError::Traversal(_))
        ));
    }

    #[test]
    fn test_missing_file_resolves_lexically() {
        let (_guard, root) = root();
        let resolved = resolve(&root, "not/yet/there.md").unwrap();
        assert_eq!(resolved, root.join("not/yet/there.md"));
    }

    #[test]
    fn test_sibling_prefix_directory_not_confused() {
        // /root-evil must not pass a containment check against /root.
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("store");
        let evil = parent.path().join("store-evil");
        std::fs::create_dir(&root).unwrap();
        std::fs::create_dir(&evil).unwrap();
        std::fs::write(evil.join("secret.md"), "x").unwrap();
        let root = root.canonicalize().unwrap();

        assert!(matches!(
            resolve(&root, "../store-evil/secret.md"),
            Err(PathError::Traversal(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escaping_root_rejected() {
        let outside = TempDir::new().unwrap();
        std::fs::write(outside.path().join("target.md"), "outside").unwrap();

        let (_guard, root) = root();
        std::os::unix::fs::symlink(outside.path().join("target.md"), root.join("link.md"))
            .unwrap();

        assert!(matches!(
            resolve(&root, "link.md"),
            Err(PathError::Traversal(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_within_root_allowed() {
        let (_guard, root) = root();
        std::fs::write(root.join("real.md"), "inside").unwrap();
        std::os::unix::fs::symlink(root.join("real.md"), root.join("alias.md")).unwrap();

        let resolved = resolve(&root, "alias.md").unwrap();
        assert_eq!(resolved, root.join("real.md"));
    }
}

//! Path resolution against the configured base directory.

use std::path::{Component, Path, PathBuf};

use crate::error::{LatexServerError, Result};

/// Resolves tool-supplied paths and enforces the allowed root.
///
/// The allowed root is the parent of the base directory, so sibling
/// directories of the base are reachable while anything above them is not.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base: PathBuf,
    allowed_root: PathBuf,
}

impl PathResolver {
    /// Create a resolver for the given base directory.
    ///
    /// Relative bases are taken against the current working directory.
    /// The base does not need to exist.
    pub fn new(base: impl AsRef<Path>) -> Result<Self> {
        let base = base.as_ref();
        let absolute = if base.is_absolute() {
            base.to_path_buf()
        } else {
            std::env::current_dir()?.join(base)
        };
        let base = normalize(&absolute);
        let allowed_root = base.parent().unwrap_or(base.as_path()).to_path_buf();

        Ok(Self { base, allowed_root })
    }

    /// The canonical base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The directory every resolved path must stay within.
    pub fn allowed_root(&self) -> &Path {
        &self.allowed_root
    }

    /// Resolve a path and check that it stays within the allowed root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let candidate = Path::new(path);
        let joined = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base.join(candidate)
        };

        let resolved = normalize(&joined);
        if !resolved.starts_with(&self.allowed_root) {
            return Err(LatexServerError::PathEscape {
                path: path.to_string(),
                root: self.allowed_root.clone(),
            });
        }

        Ok(resolved)
    }

    /// Render a path relative to the base, or in full if it lies outside it.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.base)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Canonicalize an absolute path without requiring it to exist.
///
/// Existing prefixes are canonicalized (following symlinks); once a
/// component is missing, the rest is normalized lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    let mut exists = true;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
                exists = resolved.exists();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if exists {
                    match resolved.canonicalize() {
                        Ok(canonical) => resolved = canonical,
                        Err(_) => exists = false,
                    }
                }
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> (tempfile::TempDir, PathResolver) {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("workspace/project")).unwrap();
        std::fs::create_dir_all(tmp.path().join("workspace/sibling")).unwrap();
        let resolver = PathResolver::new(tmp.path().join("workspace/project")).unwrap();
        (tmp, resolver)
    }

    #[test]
    fn test_allowed_root_is_parent_of_base() {
        let (_tmp, resolver) = layout();
        assert_eq!(resolver.allowed_root(), resolver.base().parent().unwrap());
        assert!(resolver.base().ends_with("workspace/project"));
    }

    #[test]
    fn test_relative_path_joins_base() {
        let (_tmp, resolver) = layout();
        let resolved = resolver.resolve("chapters/intro.tex").unwrap();
        assert_eq!(resolved, resolver.base().join("chapters/intro.tex"));
    }

    #[test]
    fn test_sibling_directory_is_allowed() {
        let (_tmp, resolver) = layout();
        let resolved = resolver.resolve("../sibling/notes.tex").unwrap();
        assert_eq!(
            resolved,
            resolver.allowed_root().join("sibling/notes.tex")
        );
    }

    #[test]
    fn test_escape_above_allowed_root_is_rejected() {
        let (_tmp, resolver) = layout();
        let err = resolver.resolve("../../outside.tex").unwrap_err();
        assert!(matches!(err, LatexServerError::PathEscape { .. }));
    }

    #[test]
    fn test_dot_dot_in_missing_tail_is_normalized() {
        let (_tmp, resolver) = layout();
        let resolved = resolver.resolve("missing/../../../outside.tex");
        assert!(matches!(resolved, Err(LatexServerError::PathEscape { .. })));

        let resolved = resolver.resolve("missing/deeper/../doc.tex").unwrap();
        assert_eq!(resolved, resolver.base().join("missing/doc.tex"));
    }

    #[test]
    fn test_absolute_path_outside_root_is_rejected() {
        let (tmp, resolver) = layout();
        let outside = tmp.path().join("elsewhere.tex");
        let err = resolver.resolve(outside.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("outside the allowed base path"));
    }

    #[test]
    fn test_display_relative() {
        let (_tmp, resolver) = layout();
        let inside = resolver.base().join("a/b.tex");
        assert_eq!(resolver.display_relative(&inside), "a/b.tex");

        let sibling = resolver.allowed_root().join("sibling/c.tex");
        assert_eq!(
            resolver.display_relative(&sibling),
            sibling.display().to_string()
        );
    }
}

//! Path helpers shared by config loading and the build driver.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: resolve `.` and `..` without touching the filesystem.
///
/// Prefers `canonicalize` when the path exists so symlinked roots compare equal.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join `path` onto `root` unless it is already absolute.
pub fn resolve_from(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize_path(&root.join(path))
    }
}

/// Convert a path to a `/`-separated string (for URLs built from file paths).
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_lexical() {
        let path = Path::new("/nonexistent-docsmith/a/./b/../c");
        assert_eq!(
            normalize_path(path),
            PathBuf::from("/nonexistent-docsmith/a/c")
        );
    }

    #[test]
    fn test_resolve_from_keeps_absolute() {
        let abs = Path::new("/opt/site/dist");
        assert_eq!(resolve_from(Path::new("/root"), abs), abs);
    }

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("docs/examples/alerts.md")), "docs/examples/alerts.md");
        assert_eq!(to_slash(Path::new("./README.md")), "README.md");
    }
}

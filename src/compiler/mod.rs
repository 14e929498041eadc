//! Content collection and page compilation.
//!
//! ```text
//! build.content ─► collect_markdown_files ─► load_pages ─► compile_page ─► HTML
//! ```

mod page;

pub use page::{SourcePage, check_url_conflicts, compile_page, load_pages};

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

/// Collect every Markdown file under `dir`, sorted for stable output.
///
/// Hidden directories (`.git`, `.github`, ...) are skipped.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_markdown(path) && !is_hidden(path.strip_prefix(dir).unwrap_or(path)))
        .collect();
    files.sort();
    files
}

/// Any component starting with `.`; checked relative to the content dir so
/// the content dir itself may live under a hidden path.
fn is_hidden(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str().to_str().is_some_and(|s| s.starts_with('.')))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/examples")).unwrap();
        fs::create_dir_all(root.join(".github")).unwrap();
        fs::write(root.join("README.md"), "# Home").unwrap();
        fs::write(root.join("docs/installation.md"), "").unwrap();
        fs::write(root.join("docs/examples/alerts.markdown"), "").unwrap();
        fs::write(root.join("docs/logo.svg"), "").unwrap();
        fs::write(root.join(".github/config.md"), "").unwrap();

        let files: Vec<_> = collect_markdown_files(root)
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("README.md"),
                PathBuf::from("docs/examples/alerts.markdown"),
                PathBuf::from("docs/installation.md"),
            ]
        );
    }
}

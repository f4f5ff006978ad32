//! Corpus discovery: recursive markdown enumeration with exclusion rules.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// File stems that are structural rather than articles, at any depth
const STRUCTURAL_DENYLIST: [&str; 4] = ["index", "readme", "overview", "documentation-index"];

/// File names carrying this marker hold diagram sources, not articles
const DIAGRAM_MARKER: &str = "diagram";

/// Recursively enumerate eligible document files under `root`.
///
/// Entries come back in lexicographic order per directory level, so the
/// result is reproducible for a fixed tree on every platform. A missing
/// root is zero documents, not an error; I/O failures mid-walk are.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        tracing::warn!("Content root {:?} does not exist, treating as empty corpus", root);
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_eligible(entry.path()) {
            files.push(entry.path().to_path_buf());
        } else {
            tracing::debug!("Skipping {:?}", entry.path());
        }
    }

    Ok(files)
}

fn is_eligible(path: &Path) -> bool {
    let has_markdown_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
        .unwrap_or(false);
    if !has_markdown_ext {
        return false;
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.to_lowercase().contains(DIAGRAM_MARKER) {
        return false;
    }

    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    !STRUCTURAL_DENYLIST
        .iter()
        .any(|deny| stem.eq_ignore_ascii_case(deny))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# Doc\n").unwrap();
    }

    #[test]
    fn test_scan_finds_nested_markdown() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("design-principle/solid.md"));
        touch(&dir.path().join("net/http/caching.md"));
        touch(&dir.path().join("notes.txt"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "md"));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let files = scan(&missing).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_denylist_applies_at_any_depth() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("index.md"));
        touch(&dir.path().join("design-pattern/README.md"));
        touch(&dir.path().join("design-pattern/deep/overview.md"));
        touch(&dir.path().join("design-pattern/documentation-index.md"));
        touch(&dir.path().join("design-pattern/observer.md"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("design-pattern/observer.md"));
    }

    #[test]
    fn test_diagram_marker_excludes() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("arch/sequence-diagram.md"));
        touch(&dir.path().join("arch/diagram-legend.md"));
        touch(&dir.path().join("arch/layers.md"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("arch/layers.md"));
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b/second.md"));
        touch(&dir.path().join("a/first.md"));
        touch(&dir.path().join("a/zeta.md"));

        let first = scan(dir.path()).unwrap();
        let second = scan(dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first[0].ends_with("a/first.md"));
        assert!(first[1].ends_with("a/zeta.md"));
        assert!(first[2].ends_with("b/second.md"));
    }
}

//! Write a [`DocumentSet`] to disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::document::DocumentSet;
use crate::error::{CodegenError, CodegenResult};
use crate::structure::EMPTY_DIRS;

fn create_dir(path: &Path) -> CodegenResult<()> {
    fs::create_dir_all(path).map_err(|e| CodegenError::io(path, e))
}

/// Resolve a `/`-separated document path under `root`.
pub fn document_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Create `root`, the fixed empty directories and every document's parent,
/// then write each document. Existing files are overwritten.
///
/// Returns the written file paths in document order. Stops at the first
/// failure.
pub fn write_documents(documents: &DocumentSet, root: &Path) -> CodegenResult<Vec<PathBuf>> {
    create_dir(root)?;
    for dir in EMPTY_DIRS {
        create_dir(&root.join(dir))?;
    }

    let mut written = Vec::with_capacity(documents.len());
    for (relative, text) in documents.iter() {
        let path = document_path(root, relative);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        fs::write(&path, text).map_err(|e| CodegenError::io(&path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "Wrote document");
        written.push(path);
    }

    info!(root = %root.display(), files = written.len(), "Wrote project documents");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path() {
        let root = Path::new("/tmp/project");
        assert_eq!(
            document_path(root, "milestone/Milestone1/m1.md"),
            root.join("milestone").join("Milestone1").join("m1.md")
        );
        assert_eq!(document_path(root, ".gitignore"), root.join(".gitignore"));
    }

    #[test]
    fn test_write_creates_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");

        let mut docs = DocumentSet::new();
        docs.insert("README.md", "# Hi\n");
        docs.insert("business-case/oral-defense-rubric.md", "rubric");

        let written = write_documents(&docs, &root).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# Hi\n");
        assert!(root.join("business-case/oral-defense-rubric.md").is_file());
        assert!(root.join("img").is_dir());
        assert!(root.join("tech-skills").is_dir());
    }

    #[test]
    fn test_write_reports_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut docs = DocumentSet::new();
        docs.insert("README.md", "x");

        let err = write_documents(&docs, &blocker).unwrap_err();
        match err {
            CodegenError::Io { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}

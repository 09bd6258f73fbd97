//! Corpus serialization.
//!
//! The whole corpus is written as one pretty-printed JSON array. The JSON
//! is rendered in memory first and then written to a sibling temp file that
//! is renamed over the destination, so a failed run never leaves a partial
//! artifact behind.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::models::Document;

/// Write `documents` to `path`, replacing any previous artifact.
///
/// Returns the number of bytes written.
pub fn save_corpus(documents: &[Document], path: &Path) -> Result<u64> {
    let json = serde_json::to_string_pretty(documents)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| persistence_error(parent, source))?;
    }

    let tmp = temp_path(path);
    let written = std::fs::write(&tmp, &json)
        .map_err(|source| persistence_error(&tmp, source))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(|source| persistence_error(path, source)));
    // A short write or failed rename must not leave a stray temp file.
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    info!(path = %path.display(), documents = documents.len(), bytes = json.len(), "corpus written");
    Ok(json.len() as u64)
}

/// Read a corpus artifact written by [`save_corpus`].
pub fn load_corpus(path: &Path) -> anyhow::Result<Vec<Document>> {
    use anyhow::Context;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus: {}", path.display()))?;
    let documents = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus: {}", path.display()))?;
    Ok(documents)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn persistence_error(path: &Path, source: std::io::Error) -> IngestError {
    IngestError::Persistence {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::build_document;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_json_with_literal_unicode() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("processed/nested/documents.json");
        let docs = vec![build_document("# 한글 제목\n\n본문", "a.md")];

        let bytes = save_corpus(&docs, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert_eq!(bytes, written.len() as u64);
        assert!(written.starts_with("[\n  {"));
        assert!(written.contains("\"title\": \"한글 제목\""));
        assert!(!written.contains("\\u"));
        assert!(!tmp.path().join("processed/nested/documents.json.tmp").exists());
    }

    #[test]
    fn overwrites_previous_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("documents.json");
        let first = vec![build_document("# One", "1.md"), build_document("# Two", "2.md")];
        let second = vec![build_document("# Three", "3.md")];

        save_corpus(&first, &path).unwrap();
        save_corpus(&second, &path).unwrap();

        let loaded = load_corpus(&path).unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn empty_corpus_is_an_empty_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("documents.json");
        save_corpus(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn unwritable_destination_is_a_persistence_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = save_corpus(&[], &blocker.join("documents.json")).unwrap_err();
        assert!(matches!(err, IngestError::Persistence { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let tmp = TempDir::new().unwrap();
        // A non-empty directory at the destination makes the rename fail.
        let path = tmp.path().join("documents.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let err = save_corpus(&[], &path).unwrap_err();
        assert!(matches!(err, IngestError::Persistence { .. }));
        assert!(!tmp.path().join("documents.json.tmp").exists());
        assert!(path.join("occupied").is_dir());
    }

    #[test]
    fn failed_write_keeps_previous_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("documents.json");
        std::fs::write(&path, "[]").unwrap();
        // A directory squatting on the temp name makes the write fail.
        std::fs::create_dir(tmp.path().join("documents.json.tmp")).unwrap();

        let err = save_corpus(&[build_document("# A", "a.md")], &path).unwrap_err();
        assert!(matches!(err, IngestError::Persistence { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}

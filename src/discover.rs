//! Source file discovery.
//!
//! Walks the input root and returns every file matching the include globs
//! (and none of the excludes), sorted by path relative to the root.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::IngestConfig;
use crate::error::{IngestError, Result};

/// A discovered markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative_path: String,
}

// Export folders may be named anything (`target`, `node_modules`), so only
// VCS metadata is skipped unconditionally.
const DEFAULT_EXCLUDES: [&str; 1] = ["**/.git/**"];

pub fn discover_files(config: &IngestConfig) -> Result<Vec<SourceFile>> {
    let root = &config.input_dir;
    if !root.is_dir() {
        return Err(discovery_error(root, "input root does not exist or is not a directory"));
    }

    let include_set = build_globset(root, &config.include_globs)?;

    let mut excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    excludes.extend(config.exclude_globs.iter().cloned());
    let exclude_set = build_globset(root, &excludes)?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative_path: rel_str,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!(root = %root.display(), count = files.len(), "discovered source files");

    Ok(files)
}

fn build_globset(root: &Path, patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| discovery_error(root, format!("invalid glob '{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| discovery_error(root, e.to_string()))
}

fn discovery_error(root: &Path, message: impl Into<String>) -> IngestError {
    IngestError::Discovery {
        root: root.to_path_buf(),
        message: message.into(),
    }
}

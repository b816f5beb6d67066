//! Filesystem utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::analyzer::AnalyzeError;

/// What to collect when scanning a directory for sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extension of source files, without the dot
    pub extension: String,

    /// Glob patterns, relative to the scan root, of files to leave out
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            extension: "go".to_string(),
            exclude: Vec::new(),
        }
    }
}

/// Find every source file under `root`.
///
/// Directories are walked in file-name order so the result is stable across
/// runs and platforms. Directories whose name starts with `.` or `_` are not
/// entered (the root itself excepted). Returned paths are relative to `root`
/// and use `/` as separator.
pub fn discover_sources(root: &Path, options: &ScanOptions) -> Result<Vec<String>> {
    if !root.is_dir() {
        anyhow::bail!("source directory does not exist: {}", root.display());
    }

    let exclude = options
        .exclude
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("invalid exclude pattern: {}", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut sources = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(options.extension.as_str()) {
            continue;
        }

        let relative = relative_path(root, path);
        if relative.to_str().is_none() {
            return Err(AnalyzeError::InvalidPath {
                path: path.to_path_buf(),
            }
            .into());
        }
        let relative = display_path(&relative);
        if exclude.iter().any(|p| p.matches(&relative)) {
            tracing::debug!("excluded {}", relative);
            continue;
        }

        sources.push(relative);
    }

    Ok(sources)
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || name.starts_with('_'))
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Render a path with `/` separators.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

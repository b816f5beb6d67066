//! Test utilities for godep unit tests.
//!
//! Provides source tree fixtures and an in-memory analyzer so the pipeline
//! can be exercised with or without touching the filesystem.

pub mod fixtures;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::analyzer::{Analysis, AnalyzeError, SourceAnalyzer};

pub use fixtures::*;

/// Analyzer answering from a table instead of reading files.
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    units: HashMap<PathBuf, Analysis>,
}

impl MockAnalyzer {
    /// Create an analyzer that knows no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the analysis result for a path.
    pub fn unit(
        mut self,
        path: impl Into<PathBuf>,
        package: &str,
        imports: &[&str],
        defines_entry: bool,
    ) -> Self {
        self.units.insert(
            path.into(),
            Analysis {
                package: package.to_string(),
                imports: imports.iter().map(|s| s.to_string()).collect(),
                defines_entry,
            },
        );
        self
    }
}

impl SourceAnalyzer for MockAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Analysis, AnalyzeError> {
        self.units
            .get(path)
            .cloned()
            .ok_or_else(|| AnalyzeError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "unknown unit"),
            })
    }
}

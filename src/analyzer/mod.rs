//! Source analysis.
//!
//! The analyzer answers three questions about a source file: which package it
//! declares, which packages it imports, and whether it defines the entry
//! function. Everything else about the file is irrelevant to rule generation.

mod errors;
mod scanner;

use std::collections::BTreeSet;
use std::path::Path;

pub use errors::AnalyzeError;
pub use scanner::{clean_import_path, GoAnalyzer};

/// Facts extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Declared package name
    pub package: String,

    /// Distinct import targets, cleaned
    pub imports: BTreeSet<String>,

    /// Whether the file defines the entry function at top level
    pub defines_entry: bool,
}

/// Something that can analyze source files.
pub trait SourceAnalyzer {
    /// Analyze the file at `path`.
    fn analyze(&self, path: &Path) -> Result<Analysis, AnalyzeError>;
}

//! Analysis error types and diagnostics.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Error raised when a source unit cannot be analyzed.
///
/// Any of these aborts the run: no rules are emitted for a tree that contains
/// a file the analyzer does not understand.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalyzeError {
    #[error("failed to read source file: {}", .path.display())]
    #[diagnostic(code(godep::analyze::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source file name is not valid UTF-8: {}", .path.display())]
    #[diagnostic(
        code(godep::analyze::invalid_path),
        help("rename the file; unit names appear verbatim in make rules")
    )]
    InvalidPath { path: PathBuf },

    #[error("{}: expected 'package' clause", .path.display())]
    #[diagnostic(
        code(godep::analyze::missing_package),
        help("every Go source file must begin with `package <name>`")
    )]
    MissingPackage {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("no package clause found")]
        span: SourceSpan,
    },

    #[error("{}: malformed import declaration", .path.display())]
    #[diagnostic(code(godep::analyze::malformed_import))]
    MalformedImport {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl AnalyzeError {
    /// Path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AnalyzeError::Read { path, .. }
            | AnalyzeError::InvalidPath { path }
            | AnalyzeError::MissingPackage { path, .. }
            | AnalyzeError::MalformedImport { path, .. } => path,
        }
    }
}

//! SourceUnit - a single analyzed source file.

use std::fmt;

use serde::Serialize;

/// A source file together with the facts the analyzer extracted from it.
///
/// Units are immutable once analyzed; the registry only ever stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceUnit {
    /// Path of the file as it should appear in the generated rules
    path: String,

    /// Declared package name
    package: String,

    /// Whether the file declares the entry function at top level
    defines_entry: bool,
}

impl SourceUnit {
    /// Create a new source unit.
    pub fn new(path: impl Into<String>, package: impl Into<String>, defines_entry: bool) -> Self {
        SourceUnit {
            path: path.into(),
            package: package.into(),
            defines_entry,
        }
    }

    /// Get the unit path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the owning package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Check whether this unit defines the entry function.
    pub fn defines_entry(&self) -> bool {
        self.defines_entry
    }
}

impl fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

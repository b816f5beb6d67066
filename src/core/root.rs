//! Root classification for the entry-point package.
//!
//! Every unit of the entry-point package is either a root (it defines the
//! entry function and becomes its own executable) or a common file that is
//! linked into every root.

use serde::Serialize;

use crate::core::{PackageRegistry, SourceUnit};

/// A unit that defines the entry function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Root {
    /// Source file of the root
    pub source: String,

    /// Executable target name derived from the file name
    pub target: String,
}

/// The entry-point package split into roots and common files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Roots in unit order
    pub roots: Vec<Root>,

    /// Common files in unit order
    pub common: Vec<String>,
}

/// Derive the executable target name for a root file.
///
/// The name is everything before the first `.`; a file without a `.` keeps
/// its full name, and a file whose name starts with `.` falls back to
/// `exec_name`.
pub fn target_name(filename: &str, exec_name: &str) -> String {
    match filename.split_once('.') {
        Some(("", _)) => exec_name.to_string(),
        Some((stem, _)) => stem.to_string(),
        None => filename.to_string(),
    }
}

/// Splits the entry-point package into roots and common files.
#[derive(Debug, Clone)]
pub struct RootClassifier<'a> {
    entry_package: &'a str,
    exec_name: &'a str,
}

impl<'a> RootClassifier<'a> {
    /// Create a classifier for the named entry package.
    pub fn new(entry_package: &'a str, exec_name: &'a str) -> Self {
        RootClassifier {
            entry_package,
            exec_name,
        }
    }

    /// Classify the units of the entry package.
    ///
    /// Returns `None` if the registry has no entry package.
    pub fn classify(&self, registry: &PackageRegistry) -> Option<Partition> {
        let pkg = registry.get(self.entry_package)?;

        let mut partition = Partition::default();
        for unit in pkg.units() {
            if let Some(root) = self.root_for(unit) {
                tracing::debug!("{} defines the entry function -> `{}`", unit, root.target);
                partition.roots.push(root);
            } else {
                partition.common.push(unit.path().to_string());
            }
        }

        Some(partition)
    }

    fn root_for(&self, unit: &SourceUnit) -> Option<Root> {
        if !unit.defines_entry() {
            return None;
        }
        Some(Root {
            source: unit.path().to_string(),
            target: target_name(unit.path(), self.exec_name),
        })
    }
}

//! Package - the source units sharing one package clause.

use std::collections::BTreeSet;

use crate::core::SourceUnit;

/// A package assembled from the units that declare it.
///
/// Units keep their discovery order. Import targets are kept sorted so that
/// everything emitted from a package is reproducible.
#[derive(Debug, Clone)]
pub struct Package {
    /// Package name
    name: String,

    /// Member units in discovery order
    units: Vec<SourceUnit>,

    /// Import targets referenced by any member unit
    imports: BTreeSet<String>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            units: Vec::new(),
            imports: BTreeSet::new(),
        }
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the member units.
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Get the import targets, sorted.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Append a unit to the package.
    pub(crate) fn push_unit(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }

    /// Record an import target.
    ///
    /// Returns false when the target was already present or names the
    /// package itself.
    pub(crate) fn add_import(&mut self, target: &str) -> bool {
        if target == self.name {
            return false;
        }
        self.imports.insert(target.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_import_is_idempotent() {
        let mut pkg = Package::new("util");
        assert!(pkg.add_import("fmt"));
        assert!(!pkg.add_import("fmt"));
        assert_eq!(pkg.imports().collect::<Vec<_>>(), vec!["fmt"]);
    }

    #[test]
    fn test_add_import_ignores_own_name() {
        let mut pkg = Package::new("util");
        assert!(!pkg.add_import("util"));
        assert_eq!(pkg.imports().count(), 0);
    }

    #[test]
    fn test_imports_are_sorted() {
        let mut pkg = Package::new("util");
        pkg.add_import("strings");
        pkg.add_import("fmt");
        pkg.add_import("os");
        assert_eq!(
            pkg.imports().collect::<Vec<_>>(),
            vec!["fmt", "os", "strings"]
        );
    }
}

//! Package registry - accumulates packages as units are analyzed.
//!
//! The registry is the only mutable state of a run. It is filled once by
//! [`PackageRegistry::register`] and then read by the classifier and the
//! emitter. Packages are keyed by name and iterate in name order.

use std::collections::BTreeMap;

use crate::core::{Package, SourceUnit};

/// All packages seen during a run.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: BTreeMap<String, Package>,
}

impl PackageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit and the import targets it references.
    ///
    /// Creates the unit's package on first sight, appends the unit and merges
    /// the imports into the package's import set.
    pub fn register<I, S>(&mut self, unit: SourceUnit, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pkg = self
            .packages
            .entry(unit.package().to_string())
            .or_insert_with(|| {
                tracing::debug!("new package `{}`", unit.package());
                Package::new(unit.package())
            });

        for target in imports {
            pkg.add_import(target.as_ref());
        }

        pkg.push_unit(unit);
    }

    /// Look up a package by name.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Check whether a package with this exact name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Iterate over all packages in name order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Number of registered packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

//! Dependency rule emission.
//!
//! The emitter turns a filled [`PackageRegistry`] into a [`RuleSet`] in four
//! passes:
//!
//! 1. external packages (imported but never registered)
//! 2. the list of every source file
//! 3. one rule per non-entry package
//! 4. the root/common rules of the entry-point package
//!
//! Each pass walks the registry in its fixed order (package name, then unit
//! discovery order, imports sorted), so the same tree always yields the same
//! rules. Rendering the rule set is left to [`render`].

pub mod render;

use std::collections::HashSet;

use serde::Serialize;

use crate::core::{Package, PackageRegistry, Partition};

/// Default suffix of a compiled package artifact.
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".${O}";

/// Default name of the make variable listing every source file.
pub const DEFAULT_FILE_LIST_VAR: &str = "GOFILES";

/// Options controlling rule emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name of the entry-point package
    pub entry_package: String,

    /// Suffix appended to a name to form its artifact
    pub artifact_suffix: String,

    /// Make variable holding the file list
    pub file_list_var: String,

    /// List unresolved imports in rules and print the `.EXTERNAL:` line
    pub show_needed: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            entry_package: "main".to_string(),
            artifact_suffix: DEFAULT_ARTIFACT_SUFFIX.to_string(),
            file_list_var: DEFAULT_FILE_LIST_VAR.to_string(),
            show_needed: false,
        }
    }
}

impl EmitOptions {
    /// Artifact name for a package or target.
    pub fn artifact(&self, name: &str) -> String {
        format!("{}{}", name, self.artifact_suffix)
    }
}

/// Rule building one non-entry package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRule {
    /// Package name
    pub package: String,
    /// Artifact produced by the rule
    pub artifact: String,
    /// Member source files
    pub units: Vec<String>,
    /// Artifacts of imported packages
    pub deps: Vec<String>,
}

/// Rules building one executable of the entry-point package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootRule {
    /// Executable target name
    pub target: String,
    /// Artifact the executable is linked from
    pub artifact: String,
    /// Root source file
    pub source: String,
    /// Common files of the entry-point package
    pub common: Vec<String>,
    /// Artifacts of imported packages
    pub deps: Vec<String>,
}

/// Everything the emitter produces for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Imported packages with no source in the tree
    pub external: Vec<String>,
    /// Every source file, once
    pub files: Vec<String>,
    /// Rules for non-entry packages
    pub packages: Vec<PackageRule>,
    /// Rules for the executables of the entry-point package
    pub roots: Vec<RootRule>,
}

/// Computes rules from a registry.
pub struct DependencyEmitter<'a> {
    registry: &'a PackageRegistry,
    options: &'a EmitOptions,
}

impl<'a> DependencyEmitter<'a> {
    /// Create an emitter over a filled registry.
    pub fn new(registry: &'a PackageRegistry, options: &'a EmitOptions) -> Self {
        DependencyEmitter { registry, options }
    }

    /// Run all four passes.
    pub fn emit(&self, partition: Option<&Partition>) -> RuleSet {
        RuleSet {
            external: self.external_packages(),
            files: self.file_list(),
            packages: self.package_rules(),
            roots: partition.map(|p| self.root_rules(p)).unwrap_or_default(),
        }
    }

    /// Import targets with no registered package, each once.
    pub fn external_packages(&self) -> Vec<String> {
        let mut done = HashSet::new();
        let mut external = Vec::new();

        for pkg in self.registry.packages() {
            for target in pkg.imports() {
                if !self.registry.contains(target) && done.insert(target) {
                    external.push(target.to_string());
                }
            }
        }

        external
    }

    /// Every source file, once, in first-seen order.
    pub fn file_list(&self) -> Vec<String> {
        let mut done = HashSet::new();
        let mut files = Vec::new();

        for pkg in self.registry.packages() {
            for unit in pkg.units() {
                if done.insert(unit.path()) {
                    files.push(unit.path().to_string());
                }
            }
        }

        files
    }

    /// One rule per package other than the entry-point package.
    pub fn package_rules(&self) -> Vec<PackageRule> {
        self.registry
            .packages()
            .filter(|pkg| pkg.name() != self.options.entry_package)
            .map(|pkg| PackageRule {
                package: pkg.name().to_string(),
                artifact: self.options.artifact(pkg.name()),
                units: pkg.units().iter().map(|u| u.path().to_string()).collect(),
                deps: pkg
                    .imports()
                    .filter(|target| self.registry.contains(target) || self.options.show_needed)
                    .map(|target| self.options.artifact(target))
                    .collect(),
            })
            .collect()
    }

    /// Rules for every root of the entry-point package.
    pub fn root_rules(&self, partition: &Partition) -> Vec<RootRule> {
        let Some(entry) = self.registry.get(&self.options.entry_package) else {
            return Vec::new();
        };

        partition
            .roots
            .iter()
            .map(|root| RootRule {
                target: root.target.clone(),
                artifact: self.options.artifact(&root.target),
                source: root.source.clone(),
                common: partition.common.clone(),
                deps: self.root_deps(entry),
            })
            .collect()
    }

    /// Dependencies of one root. Unresolved imports are listed at most once
    /// per root.
    fn root_deps(&self, entry: &Package) -> Vec<String> {
        let mut done = HashSet::new();
        let mut deps = Vec::new();

        for target in entry.imports() {
            if self.registry.contains(target) || (self.options.show_needed && !done.contains(target))
            {
                deps.push(self.options.artifact(target));
                done.insert(target);
            }
        }

        deps
    }
}

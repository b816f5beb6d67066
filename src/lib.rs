//! godep - dependency rules for Go source trees
//!
//! This crate groups Go source files into packages, works out which packages
//! depend on which, finds the files that define `main`, and writes make rules
//! that build every package and every executable in the right order.

pub mod analyzer;
pub mod core;
pub mod emitter;
pub mod ops;
pub mod util;

/// Test utilities for godep unit tests.
///
/// This module is only available when running tests. It provides source
/// tree fixtures and an in-memory analyzer.
#[cfg(test)]
pub mod test_support;

pub use analyzer::{Analysis, AnalyzeError, GoAnalyzer, SourceAnalyzer};
pub use crate::core::{Package, PackageRegistry, Partition, Root, RootClassifier, SourceUnit};
pub use emitter::{DependencyEmitter, EmitOptions, RuleSet};
pub use util::context::GlobalContext;

//! Core data structures for godep.
//!
//! - Source units as produced by the analyzer
//! - Packages and the registry that accumulates them
//! - Root classification of the entry-point package

pub mod package;
pub mod registry;
pub mod root;
pub mod unit;

pub use package::Package;
pub use registry::PackageRegistry;
pub use root::{target_name, Partition, Root, RootClassifier};
pub use unit::SourceUnit;

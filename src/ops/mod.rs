//! High-level operations.
//!
//! This module contains the implementation of the godep run.

pub mod generate;

pub use generate::{
    build_registry, generate, generate_with, write_rules, GenerateOptions, Generated,
    OutputFormat,
};

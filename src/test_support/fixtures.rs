//! Test fixtures for common test scenarios.
//!
//! This module provides small Go source trees that can be written to a
//! temporary directory.

use std::path::{Path, PathBuf};

/// Fixture for a tree of Go source files.
#[derive(Debug, Clone, Default)]
pub struct GoTreeFixture {
    /// Source files (path relative to the tree root -> content).
    pub files: Vec<(PathBuf, String)>,
}

impl GoTreeFixture {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Add a file declaring `package` with the given imports.
    pub fn package_file(
        self,
        path: impl Into<PathBuf>,
        package: &str,
        imports: &[&str],
        entry: bool,
    ) -> Self {
        let mut content = format!("package {}\n\n", package);
        if !imports.is_empty() {
            content.push_str("import (\n");
            for import in imports {
                content.push_str(&format!("\t\"{}\"\n", import));
            }
            content.push_str(")\n\n");
        }
        if entry {
            content.push_str("func main() {\n}\n");
        } else {
            content.push_str("func helper() {\n}\n");
        }
        self.file(path, content)
    }

    /// Two executables sharing a common file and a library package.
    ///
    /// - `client.go`, `server.go`: package main, define `main`
    /// - `shared.go`: package main, common to both
    /// - `lib/lib.go`: package lib
    pub fn multi_root() -> Self {
        Self::new()
            .package_file("client.go", "main", &["fmt", "lib", "net"], true)
            .package_file("server.go", "main", &["fmt", "lib"], true)
            .package_file("shared.go", "main", &["os"], false)
            .package_file("lib/lib.go", "lib", &["fmt"], false)
    }

    /// Write this fixture below `base_path`.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<()> {
        for (rel_path, content) in &self.files {
            let full_path = base_path.join(rel_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
        }
        Ok(())
    }

    /// Write this fixture to a fresh temporary directory.
    ///
    /// Returns the TempDir handle - dropping it will clean up the directory.
    pub fn write_to_temp(&self) -> tempfile::TempDir {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        self.write_to(tmp.path()).expect("failed to write fixture");
        tmp
    }
}

//! Global context for godep runs.
//!
//! Provides centralized access to the working directory and the
//! configuration locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, Config};

/// Where godep runs and where it looks for configuration.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global config file, if a home directory is known
    global_config: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a context for the current process.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(GlobalContext {
            cwd,
            global_config: config::global_config_path(),
        })
    }

    /// Create a context rooted at an explicit directory, without a global
    /// config.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        GlobalContext {
            cwd: cwd.into(),
            global_config: None,
        }
    }

    /// Resolve a path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Get the global config path.
    pub fn config_path(&self) -> Option<&Path> {
        self.global_config.as_deref()
    }

    /// Load the configuration that applies to a source tree.
    pub fn load_config(&self, source_root: &Path) -> Config {
        let project = config::project_config_path(&self.resolve(source_root));
        tracing::debug!("project config: {}", project.display());
        config::load_config(self.config_path(), &project)
    }
}

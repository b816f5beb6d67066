//! Configuration file support for godep.
//!
//! godep reads two configuration file locations:
//! - Global: `~/.godep/config.toml` - User-wide defaults
//! - Project: `.godep/config.toml` - Overrides for one source tree
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emitter::EmitOptions;
use crate::util::fs::ScanOptions;

/// godep configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule generation settings
    pub rules: RulesConfig,

    /// Source discovery settings
    pub scan: ScanConfig,
}

/// Rule generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Package whose files may become executables (default `main`)
    pub entry_package: Option<String>,

    /// Function that makes a file an executable (default `main`)
    pub entry_function: Option<String>,

    /// Suffix of compiled artifacts (default `.${O}`)
    pub artifact_suffix: Option<String>,

    /// Make variable listing all files (default `GOFILES`)
    pub file_list_var: Option<String>,

    /// Executable name used when none can be derived from a file name
    pub exec_name: Option<String>,

    /// Always list unresolved imports
    pub show_needed: Option<bool>,
}

/// Source discovery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Source file extension (default `go`)
    pub extension: Option<String>,

    /// Glob patterns of files to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.rules.entry_package.is_some() {
            self.rules.entry_package = other.rules.entry_package;
        }
        if other.rules.entry_function.is_some() {
            self.rules.entry_function = other.rules.entry_function;
        }
        if other.rules.artifact_suffix.is_some() {
            self.rules.artifact_suffix = other.rules.artifact_suffix;
        }
        if other.rules.file_list_var.is_some() {
            self.rules.file_list_var = other.rules.file_list_var;
        }
        if other.rules.exec_name.is_some() {
            self.rules.exec_name = other.rules.exec_name;
        }
        if other.rules.show_needed.is_some() {
            self.rules.show_needed = other.rules.show_needed;
        }

        if other.scan.extension.is_some() {
            self.scan.extension = other.scan.extension;
        }
        if !other.scan.exclude.is_empty() {
            self.scan.exclude = other.scan.exclude;
        }
    }

    /// Emission options described by this config.
    pub fn emit_options(&self) -> EmitOptions {
        let defaults = EmitOptions::default();
        EmitOptions {
            entry_package: self
                .rules
                .entry_package
                .clone()
                .unwrap_or(defaults.entry_package),
            artifact_suffix: self
                .rules
                .artifact_suffix
                .clone()
                .unwrap_or(defaults.artifact_suffix),
            file_list_var: self
                .rules
                .file_list_var
                .clone()
                .unwrap_or(defaults.file_list_var),
            show_needed: self.rules.show_needed.unwrap_or(defaults.show_needed),
        }
    }

    /// Scan options described by this config.
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        ScanOptions {
            extension: self.scan.extension.clone().unwrap_or(defaults.extension),
            exclude: self.scan.exclude.clone(),
        }
    }

    /// Entry function name.
    pub fn entry_function(&self) -> &str {
        self.rules.entry_function.as_deref().unwrap_or("main")
    }

    /// Executable name override.
    pub fn exec_name(&self) -> &str {
        self.rules.exec_name.as_deref().unwrap_or("main")
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.godep/config.toml)
/// 2. Global config (~/.godep/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global godep config directory (~/.godep).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".godep"))
}

/// Get the global config path (~/.godep/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.godep/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".godep").join("config.toml")
}

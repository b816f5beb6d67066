//! Implementation of `godep`: from source files to dependency rules.
//!
//! A run is strictly sequential: collect units, analyze and register every
//! one of them, classify the roots of the entry package, then emit. Nothing
//! is written until every unit has been analyzed, so a file that fails to
//! parse leaves no partial output behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::analyzer::{AnalyzeError, GoAnalyzer, SourceAnalyzer};
use crate::core::{PackageRegistry, Partition, RootClassifier, SourceUnit};
use crate::emitter::render::{write_json, write_makefile};
use crate::emitter::{DependencyEmitter, EmitOptions, RuleSet};
use crate::util::fs::{discover_sources, ScanOptions};

/// Output shape of the generated rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Make rules
    #[default]
    Makefile,
    /// The rule set as JSON
    Json,
}

/// Options for a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Source files to analyze (empty = scan `source_root`)
    pub files: Vec<PathBuf>,

    /// Directory scanned when no files are given
    pub source_root: PathBuf,

    /// Discovery settings
    pub scan: ScanOptions,

    /// Emission settings
    pub emit: EmitOptions,

    /// Function that makes a file a root
    pub entry_function: String,

    /// Executable name used when a root file name yields none
    pub exec_name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            files: Vec::new(),
            source_root: PathBuf::from("."),
            scan: ScanOptions::default(),
            emit: EmitOptions::default(),
            entry_function: "main".to_string(),
            exec_name: "main".to_string(),
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Packages seen
    pub registry: PackageRegistry,

    /// Roots and common files of the entry package, if there is one
    pub partition: Option<Partition>,

    /// Emitted rules
    pub rules: RuleSet,
}

/// Run godep with the Go analyzer.
pub fn generate(opts: &GenerateOptions) -> Result<Generated> {
    let analyzer = GoAnalyzer::new(opts.entry_function.as_str());
    generate_with(&analyzer, opts)
}

/// Run godep with an arbitrary analyzer.
pub fn generate_with<A: SourceAnalyzer>(analyzer: &A, opts: &GenerateOptions) -> Result<Generated> {
    let inputs = collect_inputs(opts)?;
    tracing::debug!("{} source files to analyze", inputs.len());

    let registry = build_registry(analyzer, &inputs)?;
    tracing::info!(
        "analyzed {} files in {} packages",
        inputs.len(),
        registry.len()
    );

    let partition =
        RootClassifier::new(&opts.emit.entry_package, &opts.exec_name).classify(&registry);
    if partition.is_none() {
        tracing::debug!(
            "no `{}` package; skipping executable rules",
            opts.emit.entry_package
        );
    }

    let rules = DependencyEmitter::new(&registry, &opts.emit).emit(partition.as_ref());

    Ok(Generated {
        registry,
        partition,
        rules,
    })
}

/// Analyze every input and register it.
///
/// Each input pairs the name a unit is known by in the rules with the path it
/// is read from. The first analysis failure aborts.
pub fn build_registry<A: SourceAnalyzer>(
    analyzer: &A,
    inputs: &[(String, PathBuf)],
) -> Result<PackageRegistry> {
    let mut registry = PackageRegistry::new();

    for (name, path) in inputs {
        let analysis = analyzer.analyze(path)?;
        tracing::debug!(
            "{}: package {} ({} imports)",
            name,
            analysis.package,
            analysis.imports.len()
        );

        let unit = SourceUnit::new(name.as_str(), analysis.package, analysis.defines_entry);
        registry.register(unit, &analysis.imports);
    }

    Ok(registry)
}

/// Write generated rules in the requested format.
pub fn write_rules<W: Write>(
    generated: &Generated,
    emit: &EmitOptions,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Makefile => write_makefile(&generated.rules, emit, out),
        OutputFormat::Json => write_json(&generated.rules, out),
    }
}

/// Pair each input unit name with the path to read it from.
fn collect_inputs(opts: &GenerateOptions) -> Result<Vec<(String, PathBuf)>> {
    if !opts.files.is_empty() {
        return opts
            .files
            .iter()
            .map(|f| match f.to_str() {
                Some(name) => Ok((name.to_string(), f.clone())),
                None => Err(anyhow::Error::from(AnalyzeError::InvalidPath {
                    path: f.clone(),
                })),
            })
            .collect();
    }

    let root: &Path = &opts.source_root;
    let found = discover_sources(root, &opts.scan)?;
    if found.is_empty() {
        tracing::warn!("no .{} files found under {}", opts.scan.extension, root.display());
    }

    Ok(found
        .into_iter()
        .map(|rel| {
            let path = root.join(&rel);
            (rel, path)
        })
        .collect())
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use godep::ops::{GenerateOptions, OutputFormat};
use godep::util::{Config, GlobalContext};

/// godep - construct and print a dependency tree for Go source files
#[derive(Parser)]
#[command(name = "godep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source files to analyze (defaults to every .go file under --dir)
    pub files: Vec<PathBuf>,

    /// Display external dependencies and list them in rules
    #[arg(short = 'n', long = "need")]
    pub need: bool,

    /// Name to use for an executable whose file name yields none
    #[arg(short = 'x', long)]
    pub execname: Option<String>,

    /// Directory to scan when no files are given
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Emit the rules as JSON instead of make syntax
    #[arg(long)]
    pub json: bool,

    /// Write the rules to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Output format selected on the command line.
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Makefile
        }
    }

    /// Combine flags with the loaded configuration. Flags win.
    pub fn generate_options(&self, config: &Config, ctx: &GlobalContext) -> GenerateOptions {
        let mut emit = config.emit_options();
        emit.show_needed |= self.need;

        GenerateOptions {
            files: self.files.clone(),
            source_root: ctx.resolve(&self.dir),
            scan: config.scan_options(),
            emit,
            entry_function: config.entry_function().to_string(),
            exec_name: self
                .execname
                .clone()
                .unwrap_or_else(|| config.exec_name().to_string()),
        }
    }
}

//! godep CLI - make rules for Go source trees

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use godep::ops::{generate, write_rules};
use godep::{AnalyzeError, GlobalContext};

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        match e.downcast::<AnalyzeError>() {
            Ok(analyze) => eprintln!("{:?}", miette::Report::new(analyze)),
            Err(e) => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; stdout carries the rules
    let filter = if cli.verbose {
        EnvFilter::new("godep=debug")
    } else {
        EnvFilter::new("godep=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let ctx = GlobalContext::new()?;
    let config = ctx.load_config(&cli.dir);
    let opts = cli.generate_options(&config, &ctx);

    // Everything is analyzed before anything is written.
    let generated = generate(&opts)?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_rules(&generated, &opts.emit, cli.format(), &mut out)
        }
        None => {
            let mut out = io::stdout().lock();
            write_rules(&generated, &opts.emit, cli.format(), &mut out)
        }
    }
}

//! Rendering of a [`RuleSet`].
//!
//! The make rendering is line oriented: every item is followed by a single
//! space and every line ends in a newline, which is the shape the build
//! files that include the output expect.

use std::io::Write;

use anyhow::{Context, Result};

use super::{EmitOptions, RuleSet};

/// Prefix of the machine-readable external package line.
pub const EXTERNAL_MARKER: &str = ".EXTERNAL: ";

/// Prefix of the external package comment line.
pub const EXTERNAL_COMMENT: &str = "# external packages: ";

/// Write the rule set as make rules.
pub fn write_makefile<W: Write>(rules: &RuleSet, options: &EmitOptions, out: &mut W) -> Result<()> {
    if options.show_needed {
        write_list(out, EXTERNAL_MARKER, &rules.external, &options.artifact_suffix)?;
    }
    // Always present, as a comment.
    write_list(out, EXTERNAL_COMMENT, &rules.external, "")?;

    write_list(out, &format!("{} = ", options.file_list_var), &rules.files, "")?;

    for rule in &rules.packages {
        write!(out, "{}: ", rule.artifact)?;
        for item in rule.units.iter().chain(&rule.deps) {
            write!(out, "{} ", item)?;
        }
        writeln!(out)?;
    }

    for root in &rules.roots {
        writeln!(out, "{}: {}", root.target, root.artifact)?;
    }
    for root in &rules.roots {
        write!(out, "{}: {} ", root.artifact, root.source)?;
        for item in root.common.iter().chain(&root.deps) {
            write!(out, "{} ", item)?;
        }
        writeln!(out)?;
    }

    out.flush().context("failed to flush rule output")
}

/// Write the rule set as pretty-printed JSON.
pub fn write_json<W: Write>(rules: &RuleSet, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rules).context("failed to serialize rule set")?;
    writeln!(out)?;
    out.flush().context("failed to flush rule output")
}

/// Write `prefix`, then every item followed by `suffix` and a space.
fn write_list<W: Write>(out: &mut W, prefix: &str, items: &[String], suffix: &str) -> Result<()> {
    write!(out, "{}", prefix)?;
    for item in items {
        write!(out, "{}{} ", item, suffix)?;
    }
    writeln!(out)?;
    Ok(())
}

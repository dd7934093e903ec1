//! Migration command: read, rewrite, write, report.

use crate::output;
use crate::rewriter::{RewriteReport, Rewriter};
use crate::utils::{normalize_display_path, resolve_target};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Options for the migration run
#[derive(Debug, Default)]
pub struct FixOptions {
    /// File to migrate
    pub target: PathBuf,
    /// Containment root for the target, if any
    pub root: Option<PathBuf>,
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Emit the JSON report instead of the summary
    pub json: bool,
    /// Verbose output
    pub verbose: bool,
}

/// Migrate the target file in place.
///
/// The file is read in full, every rule runs over the buffer, and the result
/// replaces the file (unless `dry_run`). In normal mode the fixed summary is
/// printed afterwards. Returns the per-rule report.
///
/// # Errors
///
/// Returns an error if the target can't be resolved, read or written.
pub fn run_fix<W: Write>(
    rewriter: &Rewriter,
    options: &FixOptions,
    mut writer: W,
) -> Result<RewriteReport> {
    let file = resolve_target(&options.target, options.root.as_deref())?;
    let shown = normalize_display_path(&file);

    let content = fs::read_to_string(&file).with_context(|| format!("Failed to read {shown}"))?;
    let outcome = rewriter.run(&content);

    if !options.dry_run {
        fs::write(&file, &outcome.text).with_context(|| format!("Failed to write {shown}"))?;
        info!(
            file = %shown,
            matches = outcome.report.total_matches(),
            "wrote migrated file"
        );
    }

    if options.json {
        output::print_json(&mut writer, &file, &outcome.report, options.dry_run)?;
    } else if options.dry_run {
        output::print_dry_run(&mut writer, &file, &outcome.report)?;
    } else {
        output::print_summary(&mut writer)?;
    }
    if options.verbose && !options.json {
        output::print_rule_table(&mut writer, &outcome.report)?;
    }

    Ok(outcome.report)
}

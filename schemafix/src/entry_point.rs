use crate::cli::Cli;
use crate::commands::{run_fix, FixOptions};
use crate::config::Config;
use crate::rewriter::Rewriter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::debug;

/// Run schemafix with the given arguments (without the program name).
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the target file can't
/// be read or written.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run schemafix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the target file can't
/// be read or written.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["schemafix".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(2);
            }
        },
    };

    crate::logging::init(cli.verbose);

    let config_start = cli.root.as_deref().unwrap_or_else(|| Path::new("."));
    let config = Config::load_from_path(config_start);
    let extra = config
        .extra_transformations()
        .context("Invalid rule in configuration")?;
    let rewriter = Rewriter::with_extra(extra);
    debug!(rules = rewriter.rules().len(), "rewriter ready");

    let options = FixOptions {
        target: cli.path.unwrap_or_else(|| config.target()),
        root: cli.root,
        dry_run: cli.dry_run,
        json: cli.json,
        verbose: cli.verbose,
    };
    let report = run_fix(&rewriter, &options, &mut *writer)?;
    debug!(changed = report.changed(), matches = report.total_matches(), "run complete");
    writer.flush()?;
    Ok(0)
}

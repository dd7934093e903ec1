use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.schemafix.toml):
  Looked up from --root (or the current directory) upwards.

  [schemafix]
  target = \"src/app/admin/projects/page.tsx\"   # Page to migrate

  # Extra rules run after the built-in ones, in file order
  [[schemafix.extra_rules]]
  id = \"status-label\"
  pattern = '\\bproject\\.statusLabel\\b'
  replacement = \"project.status\"              # Omit to delete matches
";

/// Rewrites the admin projects page for the new projects schema.
#[derive(Parser, Debug)]
#[command(
    name = "schemafix",
    version,
    about = "Migrate the admin projects page after the projects schema change",
    after_help = CONFIG_HELP
)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
pub struct Cli {
    /// File to migrate. Defaults to the configured target or
    /// `src/app/admin/projects/page.tsx`.
    pub path: Option<PathBuf>,

    /// Directory the target is resolved against and must stay inside.
    /// Also where the configuration lookup starts.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show which rules would change the file without writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the per-rule report as JSON instead of the summary.
    #[arg(long)]
    pub json: bool,

    /// Print per-rule match counts and enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["schemafix"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.root.is_none());
        assert!(!cli.dry_run && !cli.json && !cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "schemafix",
            "page.tsx",
            "--root",
            "frontend",
            "--dry-run",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("page.tsx")));
        assert_eq!(cli.root, Some(PathBuf::from("frontend")));
        assert!(cli.dry_run && cli.json && cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["schemafix", "--force"]).is_err());
    }
}

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{CONFIG_FILENAME, DEFAULT_TARGET};
use crate::rules::{Replacement, RuleError, Transformation};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[schemafix]` section.
    pub schemafix: SchemafixConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for schemafix.
pub struct SchemafixConfig {
    /// Page to migrate, relative to the directory holding the config file.
    pub target: Option<PathBuf>,
    /// Rules run after the built-in ones, in file order.
    #[serde(default)]
    pub extra_rules: Vec<ExtraRule>,
}

/// A rule defined in TOML configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtraRule {
    /// Identifier shown in reports.
    pub id: String,
    /// Regular expression pattern.
    pub pattern: String,
    /// Literal replacement; omitted means delete the match.
    pub replacement: Option<String>,
}

impl ExtraRule {
    /// Compile into a [`Transformation`].
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn compile(&self) -> Result<Transformation, RuleError> {
        let replacement = self
            .replacement
            .clone()
            .map_or(Replacement::Delete, Replacement::Literal);
        Transformation::custom(self.id.clone(), &self.pattern, replacement)
    }
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A file that exists but does not parse is logged and skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                match fs::read_to_string(&candidate) {
                    Ok(content) => match toml::from_str::<Config>(&content) {
                        Ok(mut config) => {
                            debug!(path = %candidate.display(), "loaded config");
                            config.config_file_path = Some(candidate);
                            return config;
                        }
                        Err(e) => {
                            warn!(path = %candidate.display(), error = %e, "ignoring invalid config");
                        }
                    },
                    Err(e) => {
                        warn!(path = %candidate.display(), error = %e, "cannot read config");
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// The configured target, resolved against the config file's directory.
    ///
    /// Falls back to the default page path when no target is configured.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        let target = self
            .schemafix
            .target
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET));
        match self.config_file_path.as_deref().and_then(Path::parent) {
            Some(dir) if target.is_relative() && !dir.as_os_str().is_empty() => dir.join(target),
            _ => target,
        }
    }

    /// Compile every extra rule, in order.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails to compile.
    pub fn extra_transformations(&self) -> Result<Vec<Transformation>, RuleError> {
        self.schemafix
            .extra_rules
            .iter()
            .map(ExtraRule::compile)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.schemafix.target.is_none());
        assert!(config.schemafix.extra_rules.is_empty());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_default_target() {
        assert_eq!(
            Config::default().target(),
            PathBuf::from("src/app/admin/projects/page.tsx")
        );
    }

    #[test]
    fn test_load_from_path_schemafix_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".schemafix.toml")).unwrap();
        writeln!(
            file,
            r#"[schemafix]
target = "app/page.tsx"

[[schemafix.extra_rules]]
id = "status-label"
pattern = '\bproject\.statusLabel\b'
replacement = "project.status"

[[schemafix.extra_rules]]
id = "drop-todo"
pattern = "// TODO: budget"
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.target(), root.join("app/page.tsx"));
        assert_eq!(config.schemafix.extra_rules.len(), 2);

        let rules = config.extra_transformations().unwrap();
        assert_eq!(rules[0].id, "status-label");
        assert_eq!(
            rules[0].replacement,
            Replacement::Literal("project.status".to_owned())
        );
        assert_eq!(rules[1].replacement, Replacement::Delete);
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src").join("app");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".schemafix.toml"),
            "[schemafix]\ntarget = \"page.tsx\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(
            config.target(),
            dir.path().canonicalize().unwrap().join("page.tsx")
        );
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".schemafix.toml"), "[schemafix]\n").unwrap();
        let page = dir.path().join("page.tsx");
        std::fs::write(&page, "x").unwrap();

        let config = Config::load_from_path(&page);
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".schemafix.toml"), "[schemafix\ntarget =").unwrap();

        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_invalid_extra_rule_pattern() {
        let config: Config = toml::from_str(
            "[[schemafix.extra_rules]]\nid = \"bad\"\npattern = \"(\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.extra_transformations(),
            Err(RuleError::InvalidPattern { .. })
        ));
    }
}

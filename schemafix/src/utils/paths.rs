//! Path utilities: display normalization and target containment.

use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use schemafix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\page.tsx")), "src/page.tsx");
/// assert_eq!(normalize_display_path(Path::new("./src/page.tsx")), "src/page.tsx");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Resolves the file to migrate.
///
/// Without a root the path is used as given (relative to the working
/// directory). With a root, relative paths are joined onto it and the result
/// must stay inside it after symlinks are resolved.
///
/// # Errors
///
/// Returns an error if the root or the target cannot be resolved, or if the
/// target lies outside the root.
pub fn resolve_target(path: &Path, root: Option<&Path>) -> anyhow::Result<PathBuf> {
    let Some(root) = root else {
        return Ok(path.to_path_buf());
    };

    let canonical_root = root
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("Failed to resolve root {}: {}", root.display(), e))?;
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        canonical_root.join(path)
    };
    let canonical_path = joined
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("Failed to resolve path {}: {}", joined.display(), e))?;

    if canonical_path.starts_with(&canonical_root) {
        Ok(canonical_path)
    } else {
        anyhow::bail!(
            "Path traversal detected: {} is outside of {}",
            path.display(),
            root.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_without_root_path_is_untouched() {
        let path = Path::new("src/app/admin/projects/page.tsx");
        assert_eq!(resolve_target(path, None).unwrap(), path);
    }

    #[test]
    fn test_relative_path_joined_onto_root() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("page.tsx"), "x").unwrap();

        let resolved = resolve_target(Path::new("page.tsx"), Some(dir.path())).unwrap();
        assert!(resolved.ends_with("page.tsx"));
        assert!(resolved.starts_with(dir.path().canonicalize().unwrap()));
    }

    #[test]
    fn test_escape_from_root_rejected() {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("frontend");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(outer.path().join("secret.tsx"), "x").unwrap();

        let err = resolve_target(Path::new("../secret.tsx"), Some(&root)).unwrap_err();
        assert!(err.to_string().contains("Path traversal detected"));
    }

    #[test]
    fn test_missing_target_under_root() {
        let dir = TempDir::new().unwrap();
        let err = resolve_target(Path::new("missing.tsx"), Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to resolve path"));
    }
}

//! Scope Discovery
//!
//! Suggests commit scopes from the conventional `packages/` directory of a
//! monorepo, merged with the scopes declared in the configuration.

use std::{fs, path::Path};

/// Directory whose direct subdirectories are offered as scope suggestions.
pub const PACKAGES_DIR: &str = "packages";

/// Lists the direct subdirectories of `root/packages` in natural listing
/// order. Plain files are skipped. Never fails: a missing or unreadable
/// directory yields an empty list.
#[must_use]
pub fn discover_package_scopes(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root.join(PACKAGES_DIR)) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let is_dir = entry.file_type().ok()?.is_dir();

            is_dir.then(|| entry.file_name().to_string_lossy().into_owned())
        })
        .collect()
}

/// Merges discovered and configured scopes: discovered directories first,
/// then configured scopes, concatenated without deduplication.
#[must_use]
pub fn scope_suggestions(discovered: Vec<String>, configured: &[String]) -> Vec<String> {
    let mut suggestions = discovered;
    suggestions.extend(configured.iter().cloned());

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_lists_only_directories() {
        let root = TempDir::new().unwrap();
        let packages = root.path().join(PACKAGES_DIR);
        fs::create_dir_all(packages.join("api")).unwrap();
        fs::create_dir_all(packages.join("cli")).unwrap();
        fs::write(packages.join("README.md"), "not a scope").unwrap();

        let mut scopes = discover_package_scopes(root.path());
        scopes.sort_unstable();

        assert_eq!(scopes, vec!["api", "cli"]);
    }

    #[test]
    fn test_discover_missing_packages_dir_is_empty() {
        let root = TempDir::new().unwrap();
        assert!(discover_package_scopes(root.path()).is_empty());
    }

    #[test]
    fn test_suggestions_concatenate_without_dedup() {
        let discovered = vec!["api".to_string(), "cli".to_string()];
        let configured = vec!["web".to_string()];

        assert_eq!(
            scope_suggestions(discovered, &configured),
            vec!["api", "cli", "web"]
        );
    }

    #[test]
    fn test_suggestions_keep_overlapping_names() {
        let discovered = vec!["cli".to_string()];
        let configured = vec!["cli".to_string(), "web".to_string()];

        assert_eq!(
            scope_suggestions(discovered, &configured),
            vec!["cli", "cli", "web"]
        );
    }
}

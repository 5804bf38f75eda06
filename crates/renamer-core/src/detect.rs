//! Seed project name resolution

use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::path::Path;

/// Manifest locations probed for a seed name, relative to the project root.
/// Some seeds keep their manifest nested under src/.
pub(crate) const MANIFEST_CANDIDATES: &[&str] = &["package.json", "src/package.json"];

/// Seed template names all carry this prefix.
const SEED_PREFIX: &str = "seed-";

/// Resolve the seed project name: explicit override first, then the manifest
/// candidates, then the root directory's own name. Anything else is a hard
/// configuration error; there is no silent default.
///
/// A manifest that exists but cannot be parsed aborts the run: guessing a
/// seed name from a broken tree would rewrite the wrong tokens everywhere.
pub fn resolve_seed_name(root: &Path, from_seed: Option<&str>) -> Result<String> {
    if let Some(name) = from_seed {
        return Ok(name.to_string());
    }

    for candidate in MANIFEST_CANDIDATES {
        let path = root.join(candidate);
        if !path.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let manifest: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if let Some(name) = manifest.get("name").and_then(|n| n.as_str()) {
            if name.starts_with(SEED_PREFIX) {
                return Ok(name.to_string());
            }
        }
    }

    if let Some(base) = root.file_name().and_then(|n| n.to_str()) {
        if base.starts_with(SEED_PREFIX) {
            return Ok(base.to_string());
        }
    }

    Err(ConfigError::SeedNotFound.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let name = resolve_seed_name(dir.path(), Some("Seed-Dotnet-RestApi")).unwrap();
        assert_eq!(name, "Seed-Dotnet-RestApi");
    }

    #[test]
    fn test_detects_from_root_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "seed-nodejs-npm-lib", "version": "1.0.0"}"#,
        )
        .unwrap();

        let name = resolve_seed_name(dir.path(), None).unwrap();
        assert_eq!(name, "seed-nodejs-npm-lib");
    }

    #[test]
    fn test_detects_from_nested_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/package.json"),
            r#"{"name": "seed-nodejs-sqs-consumer"}"#,
        )
        .unwrap();

        let name = resolve_seed_name(dir.path(), None).unwrap();
        assert_eq!(name, "seed-nodejs-sqs-consumer");
    }

    #[test]
    fn test_ignores_manifest_without_seed_prefix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "already-renamed"}"#,
        )
        .unwrap();

        let err = resolve_seed_name(dir.path(), None).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_falls_back_to_directory_name() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("seed-from-dirname");
        fs::create_dir(&root).unwrap();

        let name = resolve_seed_name(&root, None).unwrap();
        assert_eq!(name, "seed-from-dirname");
    }

    #[test]
    fn test_broken_manifest_aborts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "not json at all").unwrap();

        assert!(resolve_seed_name(dir.path(), None).is_err());
    }
}

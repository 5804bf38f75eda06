//! Project manifest (package.json) bootstrap-script cleanup

use crate::detect::MANIFEST_CANDIDATES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Script entries that are only meaningful while the template is still a
/// seed; stripped once the project has been renamed.
const BOOTSTRAP_SCRIPTS: &[&str] = &["rename", "cleanup"];

/// A package.json. Only the fields the renamer touches are modeled; every
/// other field passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Manifest {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write back pretty-printed with a trailing newline.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        content.push('\n');
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Remove the bootstrap-only script entries. Returns true when any were
    /// present.
    pub fn strip_bootstrap_scripts(&mut self) -> bool {
        let Some(scripts) = self.scripts.as_mut() else {
            return false;
        };
        let mut removed = false;
        for key in BOOTSTRAP_SCRIPTS {
            removed |= scripts.remove(*key).is_some();
        }
        removed
    }
}

/// Strip bootstrap scripts from each manifest candidate present under
/// `root`. Returns the paths actually rewritten.
pub async fn cleanup_manifests(root: &Path) -> Result<Vec<PathBuf>> {
    let mut updated = Vec::new();

    for candidate in MANIFEST_CANDIDATES {
        let path = root.join(candidate);
        if !path.exists() {
            continue;
        }
        let mut manifest = Manifest::load(&path).await?;
        if manifest.strip_bootstrap_scripts() {
            manifest.save(&path).await?;
            updated.push(path);
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[test]
    fn test_strip_removes_only_bootstrap_entries() {
        let mut manifest: Manifest = serde_json::from_str(
            r#"{
                "name": "my-new-service",
                "scripts": {
                    "rename": "node scripts/init/rename.js",
                    "cleanup": "rm -rf scripts/init",
                    "test": "mocha"
                }
            }"#,
        )
        .unwrap();

        assert!(manifest.strip_bootstrap_scripts());

        let scripts = manifest.scripts.as_ref().unwrap();
        assert!(!scripts.contains_key("rename"));
        assert!(!scripts.contains_key("cleanup"));
        assert!(scripts.contains_key("test"));
    }

    #[test]
    fn test_strip_without_scripts_is_a_no_op() {
        let mut manifest: Manifest = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(!manifest.strip_bootstrap_scripts());
    }

    #[test]
    fn test_unknown_fields_survive_a_round_trip() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"name": "x", "dependencies": {"glob": "^10.0.0"}, "license": "MIT"}"#,
        )
        .unwrap();

        let out = serde_json::to_string(&manifest).unwrap();
        assert!(out.contains("dependencies"));
        assert!(out.contains("\"glob\""));
        assert!(out.contains("MIT"));
    }

    #[tokio::test]
    async fn test_cleanup_rewrites_both_manifest_locations() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::create_dir(dir.path().join("src")).unwrap();
        let body = r#"{"name": "x", "scripts": {"rename": "y", "test": "z"}}"#;
        std_fs::write(dir.path().join("package.json"), body).unwrap();
        std_fs::write(dir.path().join("src/package.json"), body).unwrap();

        let updated = cleanup_manifests(dir.path()).await.unwrap();
        assert_eq!(updated.len(), 2);

        for candidate in ["package.json", "src/package.json"] {
            let content = std_fs::read_to_string(dir.path().join(candidate)).unwrap();
            assert!(!content.contains("rename"));
            assert!(content.contains("test"));
            assert!(content.ends_with('\n'));
        }
    }

    #[tokio::test]
    async fn test_cleanup_skips_missing_manifests() {
        let dir = tempfile::tempdir().unwrap();
        let updated = cleanup_manifests(dir.path()).await.unwrap();
        assert!(updated.is_empty());
    }
}

//! Post-rename removal of bootstrap-only files
//!
//! The seed templates ship their own init tooling under scripts/init and,
//! in the nested-manifest layout, a root package.json that only exists to
//! drive it. Once the project is renamed none of that belongs in the tree.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Remove the bootstrap leftovers under `root`: the scripts/init directory,
/// the scripts directory itself once that leaves it empty, and the root
/// manifest when the real one lives under src/. Returns the paths removed.
///
/// Runs after the lockfile step, since regenerating the lockfile still
/// needs the root manifest in place.
pub async fn remove_bootstrap_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    let init_dir = root.join("scripts").join("init");
    if init_dir.exists() {
        fs::remove_dir_all(&init_dir)
            .await
            .with_context(|| format!("Failed to remove {}", init_dir.display()))?;
        removed.push(init_dir);

        let scripts_dir = root.join("scripts");
        if is_empty_dir(&scripts_dir).await? {
            fs::remove_dir(&scripts_dir)
                .await
                .with_context(|| format!("Failed to remove {}", scripts_dir.display()))?;
            removed.push(scripts_dir);
        }
    }

    // The root manifest is only a bootstrap shim when the real one is
    // nested under src/.
    let root_manifest = root.join("package.json");
    if root_manifest.exists() && root.join("src").join("package.json").exists() {
        fs::remove_file(&root_manifest)
            .await
            .with_context(|| format!("Failed to remove {}", root_manifest.display()))?;
        removed.push(root_manifest);
    }

    Ok(removed)
}

async fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read {}", dir.display()))?;
    Ok(entries.next_entry().await?.is_none())
}

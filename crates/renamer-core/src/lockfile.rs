//! Lockfile regeneration via the package manager

use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Regenerate package-lock.json by running `npm install` in `root`.
///
/// The rename itself is already complete at this point, so a failing or
/// missing npm is downgraded to a warning rather than failing the run.
/// Returns true when the lockfile was regenerated.
pub async fn regenerate(root: &Path) -> bool {
    if !root.join("package.json").exists() {
        return false;
    }

    println!("{}", "Regenerating package-lock.json...".cyan());

    match Command::new("npm")
        .arg("install")
        .current_dir(root)
        .status()
        .await
    {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!(
                "{} npm install exited with {}; run it manually to refresh the lockfile",
                "Warning:".yellow(),
                status
            );
            false
        }
        Err(e) => {
            eprintln!(
                "{} could not run npm install ({}); run it manually to refresh the lockfile",
                "Warning:".yellow(),
                e
            );
            false
        }
    }
}

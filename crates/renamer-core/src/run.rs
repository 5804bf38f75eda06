//! End-to-end rename orchestration

use crate::engine::RunStats;
use crate::paths::ProjectLayout;
use crate::variants::NameVariant;
use crate::{cleanup, detect, engine, lockfile, manifest, paths, variants, walker};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Options for one rename run.
///
/// Passed explicitly by the caller; the core never reads process arguments
/// or any other shared state itself, so it can be driven from tests or
/// embedded in other tools.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// The new project name (letters, numbers, and hyphens).
    pub new_name: String,

    /// Seed name override; auto-detected from the tree when absent.
    pub from_seed: Option<String>,

    /// Project layout conventions for the path-rename step.
    pub layout: ProjectLayout,

    /// Root of the cloned seed project.
    pub root: PathBuf,

    /// Skip the lockfile regeneration subprocess.
    pub skip_lockfile: bool,
}

/// What a completed run did.
#[derive(Debug)]
pub struct RunReport {
    /// The seed name that was replaced (supplied or detected).
    pub seed_name: String,

    /// Substitution counters.
    pub stats: RunStats,

    /// (old, new) pairs actually renamed on disk.
    pub renamed_paths: Vec<(PathBuf, PathBuf)>,

    /// Where the project root ended up; differs from the requested root
    /// when the root directory itself carried the seed name.
    pub project_root: PathBuf,

    /// Manifests rewritten to drop bootstrap scripts.
    pub updated_manifests: Vec<PathBuf>,

    /// Bootstrap files and directories deleted at the end of the run.
    pub removed_paths: Vec<PathBuf>,
}

/// Run the full rename: validate, resolve the seed name, substitute file
/// contents, rename paths, strip bootstrap scripts, regenerate the lockfile,
/// and delete the bootstrap tooling itself.
///
/// Configuration problems surface as errors before anything is touched.
/// Once file processing has started, per-file trouble is recovered locally
/// (see the engine) and the run always carries on to the end.
pub async fn run(options: &RenameOptions) -> Result<RunReport> {
    variants::validate_name(&options.new_name)?;
    let seed_name = detect::resolve_seed_name(&options.root, options.from_seed.as_deref())?;

    let seed = NameVariant::derive(&seed_name);
    let target = NameVariant::derive(&options.new_name);
    let replacements = variants::replacement_table(&seed, &target);

    println!(
        "{}",
        format!("Renaming {} to {}...", seed_name, options.new_name)
            .cyan()
            .bold()
    );

    let files = walker::list_files(&options.root)?;
    println!("Found {} files to process", files.len());

    let stats = engine::apply_substitutions(&files, &replacements).await;

    println!();
    println!("Processed {} files", stats.files_scanned);
    println!("Modified {} files", stats.modified_files.len());
    println!("Made {} replacements", stats.total_replacements);

    let renamed_paths = paths::rename_paths(&options.root, &seed, &target, options.layout);

    // The root directory itself may have been renamed; every later step
    // must work against its new location.
    let project_root = renamed_paths
        .iter()
        .find(|(old, _)| old == &options.root)
        .map(|(_, new)| new.clone())
        .unwrap_or_else(|| options.root.clone());

    let updated_manifests = manifest::cleanup_manifests(&project_root).await?;

    if !options.skip_lockfile && options.layout == ProjectLayout::Generic {
        lockfile::regenerate(&project_root).await;
    }

    // Last, after the lockfile step no longer needs the root manifest.
    let removed_paths = cleanup::remove_bootstrap_files(&project_root).await?;

    Ok(RunReport {
        seed_name,
        stats,
        renamed_paths,
        project_root,
        updated_manifests,
        removed_paths,
    })
}

//! File and directory renaming for known project layouts

use crate::variants::NameVariant;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which project layout conventions the renamer looks for on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectLayout {
    /// Plain layout: nothing but the project root itself carries the seed
    /// name on disk.
    #[default]
    Generic,

    /// .NET layout: solution file, project and test directories, and the
    /// csproj files inside them.
    DotNet,
}

/// Rename well-known seed-named files and directories to their target
/// equivalents, finishing with the cloned root directory itself. Each
/// candidate pair is attempted independently; a rename happens only if the
/// old path exists and the new one does not, so collisions are skipped
/// rather than overwritten. Returns the pairs actually renamed.
pub fn rename_paths(
    root: &Path,
    seed: &NameVariant,
    target: &NameVariant,
    layout: ProjectLayout,
) -> Vec<(PathBuf, PathBuf)> {
    let mut renamed = Vec::new();

    if layout == ProjectLayout::DotNet {
        rename_if_exists(
            &root.join(&seed.camel),
            &root.join(&target.camel),
            &mut renamed,
        );
        rename_if_exists(
            &root.join(format!("{}.Tests", seed.camel)),
            &root.join(format!("{}.Tests", target.camel)),
            &mut renamed,
        );
        rename_if_exists(
            &root.join(format!("{}.sln", seed.camel)),
            &root.join(format!("{}.sln", target.camel)),
            &mut renamed,
        );

        // The csproj files live inside the directories renamed above.
        let project_dir = root.join(&target.camel);
        rename_if_exists(
            &project_dir.join(format!("{}.csproj", seed.camel)),
            &project_dir.join(format!("{}.csproj", target.camel)),
            &mut renamed,
        );
        let tests_dir = root.join(format!("{}.Tests", target.camel));
        rename_if_exists(
            &tests_dir.join(format!("{}.Tests.csproj", seed.camel)),
            &tests_dir.join(format!("{}.Tests.csproj", target.camel)),
            &mut renamed,
        );

        rename_loose_solution(root, seed, target, &mut renamed);
    }

    // The clone is usually checked out under the seed's own name; rename
    // the root directory last, once everything inside it has been handled.
    rename_project_root(root, seed, target, &mut renamed);

    renamed
}

fn rename_project_root(
    root: &Path,
    seed: &NameVariant,
    target: &NameVariant,
    renamed: &mut Vec<(PathBuf, PathBuf)>,
) {
    let Some(parent) = root.parent() else {
        return;
    };
    let matches_seed = root
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|base| base == seed.kebab || base == seed.lower_kebab);
    if matches_seed {
        rename_if_exists(root, &parent.join(&target.lower_kebab), renamed);
    }
}

fn rename_if_exists(old: &Path, new: &Path, renamed: &mut Vec<(PathBuf, PathBuf)>) {
    if !old.exists() || new.exists() {
        return;
    }
    match fs::rename(old, new) {
        Ok(()) => {
            println!(
                "  {} {} -> {}",
                "renamed".green(),
                old.file_name().unwrap_or_default().to_string_lossy(),
                new.file_name().unwrap_or_default().to_string_lossy()
            );
            renamed.push((old.to_path_buf(), new.to_path_buf()));
        }
        Err(e) => {
            eprintln!(
                "{} could not rename {}: {}",
                "Warning:".yellow(),
                old.display(),
                e
            );
        }
    }
}

/// Seed solutions do not always match the expected literal name; pick up any
/// root-level .sln whose stem case-insensitively contains a seed variant.
fn rename_loose_solution(
    root: &Path,
    seed: &NameVariant,
    target: &NameVariant,
    renamed: &mut Vec<(PathBuf, PathBuf)>,
) {
    let target_sln = root.join(format!("{}.sln", target.camel));
    if target_sln.exists() {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };
    let needles = [
        seed.camel.to_lowercase(),
        seed.kebab.to_lowercase(),
        seed.pascal.to_lowercase(),
    ];

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|e| e != "sln") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if needles.iter().any(|n| stem.contains(n.as_str())) {
            rename_if_exists(&path, &target_sln, renamed);
            return;
        }
    }
}

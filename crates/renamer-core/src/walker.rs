//! Denylist-driven file enumeration

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "target",
    "bin",
    "obj",
];

/// File names skipped wherever they appear.
const SKIP_FILES: &[&str] = &["package-lock.json", ".DS_Store", "Thumbs.db"];

/// File suffixes skipped wherever they appear.
const SKIP_SUFFIXES: &[&str] = &[".log", ".tsbuildinfo"];

/// Extensions excluded from enumeration outright (images, archives,
/// executables). The engine re-checks a slightly wider set on top.
const SKIP_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "ico", "pdf", "zip", "tar", "gz", "jar", "exe", "bin",
];

/// Enumerate every file under `root`, skipping denylisted entries before
/// descending into them, so excluded directory subtrees (node_modules, .git)
/// are never traversed at all. Entries are sorted by file name so runs
/// produce stable logs.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker.filter_entry(|e| !is_excluded(e)) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_excluded(entry: &DirEntry) -> bool {
    // Never filter the walk root itself, whatever it happens to be called.
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    if entry.file_type().is_dir() {
        if SKIP_DIRS.iter().any(|d| name == *d) {
            return true;
        }
        // Bootstrap scripts live in scripts/init; the renamer must not
        // rewrite itself.
        return name == "init" && entry.path().parent().is_some_and(|p| p.ends_with("scripts"));
    }

    if SKIP_FILES.iter().any(|f| name == *f) {
        return true;
    }
    if SKIP_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return true;
    }
    if let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) {
        if SKIP_EXTENSIONS.iter().any(|x| ext.eq_ignore_ascii_case(x)) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_skips_dependency_and_vcs_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("index.js"));
        touch(&dir.path().join("node_modules/dep/index.js"));
        touch(&dir.path().join(".git/config"));

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("index.js"));
    }

    #[test]
    fn test_skips_init_scripts_but_not_other_scripts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("scripts/init/rename.js"));
        touch(&dir.path().join("scripts/deploy.sh"));

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("deploy.sh"));
    }

    #[test]
    fn test_skips_lockfiles_logs_and_binary_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("package-lock.json"));
        touch(&dir.path().join("run.log"));
        touch(&dir.path().join("logo.png"));
        touch(&dir.path().join("main.tsbuildinfo"));
        touch(&dir.path().join("README.md"));

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("README.md"));
    }

    #[test]
    fn test_includes_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join(".gitignore"));
        touch(&dir.path().join(".env.example"));

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("c.txt"));

        let first = list_files(dir.path()).unwrap();
        let second = list_files(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}

//! Literal substring substitution over a file set
//!
//! Files are processed strictly one at a time: fully read, substituted, and
//! conditionally written back before the next is considered. A failure on
//! one file is logged and recorded but never aborts the pass, since the
//! operation is destructive and a half-renamed tree is still better than an
//! aborted one.

use crate::variants::Replacement;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Extensions treated as binary and never rewritten. Superset of the
/// walker's enumeration denylist (adds debug-symbol formats) in case the
/// caller hands the engine paths from elsewhere.
const BINARY_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "ico", "pdf", "zip", "tar", "gz", "jar", "exe", "bin", "dll",
    "pdb",
];

/// Counters accumulated across one substitution pass.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Every file handed to the engine, including binary-skipped ones.
    pub files_scanned: usize,

    /// Distinct files whose content changed and was written back.
    pub modified_files: BTreeSet<PathBuf>,

    /// Total replacement occurrences across all files.
    pub total_replacements: usize,

    /// Files that could not be read or written, with the failure message.
    pub errors: Vec<(PathBuf, String)>,
}

/// True when the extension marks a file the engine never rewrites.
pub fn is_binary_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.iter().any(|b| ext.eq_ignore_ascii_case(b)))
}

/// Apply a replacement list to `content` in list order.
///
/// Returns the rewritten content plus one occurrence count per replacement.
/// Each count is taken on the content as it stands *before* that replacement
/// runs: a replacement that consumes a longer token is never double-counted
/// by a later, shorter one, while text introduced by an earlier replacement
/// is counted by later ones at the point it appears.
pub fn substitute(content: &str, replacements: &[Replacement]) -> (String, Vec<usize>) {
    let mut content = content.to_string();
    let mut counts = Vec::with_capacity(replacements.len());

    for replacement in replacements {
        let count = content.matches(replacement.from.as_str()).count();
        if count > 0 {
            content = content.replace(replacement.from.as_str(), &replacement.to);
        }
        counts.push(count);
    }

    (content, counts)
}

/// Run the replacement list over every file, sequentially and in the given
/// order. Unreadable or unwritable files are recorded in the stats and do
/// not contribute to the modified or occurrence counters.
pub async fn apply_substitutions(files: &[PathBuf], replacements: &[Replacement]) -> RunStats {
    let mut stats = RunStats::default();

    for file in files {
        stats.files_scanned += 1;

        if is_binary_file(file) {
            continue;
        }

        let original = match fs::read_to_string(file).await {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{} error processing {}: {}",
                    "Warning:".yellow(),
                    file.display(),
                    e
                );
                stats.errors.push((file.clone(), e.to_string()));
                continue;
            }
        };

        let (content, counts) = substitute(&original, replacements);
        if content == original {
            continue;
        }

        if let Err(e) = fs::write(file, &content).await {
            eprintln!(
                "{} error writing {}: {}",
                "Warning:".yellow(),
                file.display(),
                e
            );
            stats.errors.push((file.clone(), e.to_string()));
            continue;
        }

        for (replacement, count) in replacements.iter().zip(&counts) {
            if *count > 0 {
                println!(
                    "  {} replaced \"{}\" with \"{}\" in {} ({} occurrences)",
                    "->".blue(),
                    replacement.from,
                    replacement.to,
                    file.display(),
                    count
                );
                stats.total_replacements += count;
            }
        }
        stats.modified_files.insert(file.clone());
    }

    stats
}

//! Typed configuration errors

use thiserror::Error;

/// Fatal configuration problems detected before any file is touched.
///
/// These bubble up to the CLI boundary, which prints the message as a
/// remediation hint and exits with code 1. Per-file I/O trouble during a run
/// is handled locally by the engine and never surfaces here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested project name contains characters outside [A-Za-z0-9-].
    #[error("invalid project name '{0}': use only letters, numbers, and hyphens")]
    InvalidName(String),

    /// No seed name was supplied and none could be detected from the
    /// manifest candidates or the working directory name.
    #[error("could not detect the seed project name; pass it explicitly with --from <seed-name>")]
    SeedNotFound,
}

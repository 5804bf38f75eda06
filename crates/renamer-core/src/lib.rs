//! Renamer Core - library for specializing cloned seed template projects
//!
//! A seed template is a checked-out starter repository that still carries
//! its own name everywhere: manifests, source, docs, Terraform resources,
//! solution files. This library rewrites all of it in one pass:
//!
//! - **Variant derivation** - every case convention of the seed and target
//!   names, plus the ordered replacement table (`variants`)
//! - **Substitution** - literal, order-sensitive content rewriting with
//!   per-file error recovery (`engine`)
//! - **Path renaming** - layout-aware file/directory renames with collision
//!   avoidance (`paths`)
//! - **Cleanup** - bootstrap-script stripping, lockfile regeneration, and
//!   removal of the init tooling itself (`manifest`, `lockfile`, `cleanup`)
//!
//! The `run` module ties these together behind an explicit options struct;
//! nothing in the library terminates the process or reads global state, so
//! every step is directly testable.

pub mod cleanup;
pub mod detect;
pub mod engine;
pub mod error;
pub mod lockfile;
pub mod manifest;
pub mod paths;
pub mod run;
pub mod variants;
pub mod walker;

// Re-export main types for convenience
pub use engine::{apply_substitutions, substitute, RunStats};
pub use error::ConfigError;
pub use paths::{rename_paths, ProjectLayout};
pub use run::{run, RenameOptions, RunReport};
pub use variants::{replacement_table, validate_name, NameVariant, Replacement};
pub use walker::list_files;

//! The linear migration pipeline
//!
//! Copies the known artifacts from a source modpack directory to a target
//! directory. The pipeline is strictly sequential: resolve paths, validate
//! the source, prepare the target, scan for artifacts, copy, post-process
//! the settings file, persist the last target, report.
//!
//! Copy semantics are deliberately non-transactional: the first failing
//! action aborts the run, but completed copies and created target
//! directories stay on disk.

pub mod actions;
mod executor;
mod orchestrator;
mod postprocess;
mod reporting;

pub use orchestrator::MigrationEngine;
pub use reporting::MigrationReporter;

/// One migration request, immutable for the duration of the run
#[derive(Debug, Clone)]
pub struct MigrationRequest {
    /// Raw source directory input (may use `~` shorthand)
    pub source_dir: String,
    /// Raw target directory input (may use `~` shorthand)
    pub target_dir: String,
    /// Rewrite the copied settings file to disable the in-game tutorial
    pub disable_tutorial: bool,
}

/// Success data from a completed pipeline run
#[derive(Debug, Clone, Default)]
pub struct MigrationSummary {
    /// Display names of artifacts absent at the source
    pub missing: Vec<String>,
    /// Non-fatal notes, e.g. a failed last-target save
    pub warnings: Vec<String>,
}

/// Terminal result of one migration run, never mutated after construction
#[derive(Debug, Clone, Default)]
pub struct MigrationOutcome {
    /// Whether the migration succeeded
    pub ok: bool,
    /// Human-readable summary
    pub message: String,
    /// Display names of artifacts absent at the source (success path only)
    pub missing: Vec<String>,
    /// Non-fatal notes, e.g. a failed last-target save
    pub warnings: Vec<String>,
}

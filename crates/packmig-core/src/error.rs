//! Typed error taxonomy for the migration engine
//!
//! Every variant is terminal for the current invocation; nothing is retried.
//! Callers branch on the variant, not on message text. Messages embed the
//! underlying OS error where one exists, for diagnosability.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;

/// Errors that can occur during a migration run
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Source or target input was empty or whitespace-only
    #[error("both source and target directories must be provided")]
    InvalidInput,

    /// The source directory does not exist or cannot be read
    #[error("source directory is not readable: {source}")]
    SourceUnreadable {
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The target path exists but is not a directory
    #[error("target path is not a directory: {}", .path.display())]
    TargetNotDirectory {
        /// The offending path
        path: PathBuf,
    },

    /// The target directory exists but lacks read or write permission
    #[error("target directory is not accessible: {source}")]
    TargetUnwritable {
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The target directory did not exist and could not be created
    #[error("failed to create target directory: {source}")]
    TargetCreateFailed {
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// A copy action failed; earlier completed copies stay on disk
    #[error("copy failed for {}: {source}", .path.display())]
    CopyFailed {
        /// Path involved in the failed copy
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The tutorial-flag rewrite of the copied settings file failed
    #[error("failed to rewrite tutorial setting in {}: {source}", .path.display())]
    PostProcessFailed {
        /// The copied settings file
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },
}

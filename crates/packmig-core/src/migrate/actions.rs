//! Copy actions produced by the artifact scanner

use std::path::{Path, PathBuf};

use crate::artifacts::{ArtifactKind, ArtifactSpec};

/// A copy bound to concrete absolute source and destination paths
///
/// Constructed only by the scanner, after the artifact's existence and kind
/// check passed; the executor never probes existence itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAction {
    /// Whole-file overwrite copy
    File {
        /// The artifact being copied
        artifact: ArtifactSpec,
        /// Absolute source path
        source: PathBuf,
        /// Absolute destination path
        dest: PathBuf,
    },
    /// Recursive, non-deleting merge of a directory tree
    Directory {
        /// The artifact being copied
        artifact: ArtifactSpec,
        /// Absolute source path
        source: PathBuf,
        /// Absolute destination path
        dest: PathBuf,
    },
}

impl CopyAction {
    /// Bind a spec to concrete endpoint paths.
    #[must_use]
    pub fn for_spec(spec: &ArtifactSpec, source: PathBuf, dest: PathBuf) -> Self {
        match spec.kind {
            ArtifactKind::File => Self::File {
                artifact: *spec,
                source,
                dest,
            },
            ArtifactKind::Directory => Self::Directory {
                artifact: *spec,
                source,
                dest,
            },
        }
    }

    /// The artifact this action copies.
    #[must_use]
    pub const fn artifact(&self) -> &ArtifactSpec {
        match self {
            Self::File { artifact, .. } | Self::Directory { artifact, .. } => artifact,
        }
    }

    /// Destination path of this action.
    #[must_use]
    pub fn dest(&self) -> &Path {
        match self {
            Self::File { dest, .. } | Self::Directory { dest, .. } => dest,
        }
    }
}

//! The fixed set of migratable configuration artifacts
//!
//! Expressed as a static, iterable table of descriptors so the scan and
//! copy phases stay uniform; adding a fourth artifact is one more entry.

/// Kind of filesystem entry an artifact is expected to be at the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single regular file, copied with whole-file overwrite
    File,
    /// A directory tree, copied recursively as a non-deleting merge
    Directory,
}

/// Descriptor for one known artifact, relative to the modpack root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Human-readable name used in verbose output
    pub name: &'static str,
    /// Path relative to the source/target root (case-sensitive)
    pub relative_path: &'static str,
    /// Expected entry kind at the source
    pub kind: ArtifactKind,
    /// Whether absence fails the migration. Always false today; kept so a
    /// future mandatory artifact is a field flip, not new control flow.
    pub required: bool,
}

impl ArtifactSpec {
    /// Display name for reports, with a trailing separator marking
    /// directory-kind artifacts.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            ArtifactKind::File => self.relative_path.to_string(),
            ArtifactKind::Directory => format!("{}/", self.relative_path),
        }
    }
}

/// Relative path of the settings file targeted by the tutorial rewrite
pub const SETTINGS_FILE: &str = "options.txt";

/// The known artifacts, in scan and copy order
pub static ARTIFACTS: [ArtifactSpec; 3] = [
    ArtifactSpec {
        name: "game settings",
        relative_path: SETTINGS_FILE,
        kind: ArtifactKind::File,
        required: false,
    },
    ArtifactSpec {
        name: "map data",
        relative_path: "journeymap",
        kind: ArtifactKind::Directory,
        required: false,
    },
    ArtifactSpec {
        name: "server list",
        relative_path: "servers.dat",
        kind: ArtifactKind::File,
        required: false,
    },
];

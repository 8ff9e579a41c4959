//! Artifact presence scanning
//!
//! Probes the source for each entry of the fixed artifact table and builds
//! the copy plan. Absence is ordinary data, never an error: a missing or
//! wrong-kind artifact lands in `missing` and the scan continues.

use std::fs;
use std::path::Path;

use crate::artifacts::{ARTIFACTS, ArtifactKind, ArtifactSpec};
use crate::migrate::actions::CopyAction;

/// Result of scanning the source for known artifacts
#[derive(Debug)]
pub struct ScanOutcome {
    /// Copy actions for artifacts confirmed present with the expected kind
    pub actions: Vec<CopyAction>,
    /// Display names of artifacts absent (or of the wrong kind) at the source
    pub missing: Vec<String>,
}

/// Scans the source root for the fixed artifact set
pub struct ArtifactScanner;

impl ArtifactScanner {
    /// Build the copy plan for one migration.
    ///
    /// Artifacts are probed in declared order; the resulting actions run in
    /// that same order. A [`CopyAction`] is only constructed here, after the
    /// existence and kind check passed; the executor never probes.
    #[must_use]
    pub fn scan(source_root: &Path, target_root: &Path) -> ScanOutcome {
        let mut actions = Vec::new();
        let mut missing = Vec::new();

        for spec in &ARTIFACTS {
            let source = source_root.join(spec.relative_path);
            let dest = target_root.join(spec.relative_path);

            if Self::probe(spec, &source) {
                actions.push(CopyAction::for_spec(spec, source, dest));
            } else {
                missing.push(spec.display_name());
            }
        }

        ScanOutcome { actions, missing }
    }

    /// Check that the artifact exists at the source with the expected kind.
    fn probe(spec: &ArtifactSpec, source: &Path) -> bool {
        match spec.kind {
            ArtifactKind::File => fs::File::open(source).is_ok(),
            ArtifactKind::Directory => fs::metadata(source).is_ok_and(|m| m.is_dir()),
        }
    }
}

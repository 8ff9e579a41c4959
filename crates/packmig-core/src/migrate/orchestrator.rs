//! Migration orchestration - drives the linear pipeline
//!
//! resolve → validate source → prepare target → scan → copy → post-process
//! → persist last target → report. Single-threaded; one migration runs to
//! completion or first hard failure, with no cancellation mid-run.

use std::path::Path;

use super::actions::CopyAction;
use super::executor::CopyExecutor;
use super::postprocess::TutorialRewriter;
use super::reporting::MigrationReporter;
use super::{MigrationOutcome, MigrationRequest, MigrationSummary};
use crate::artifacts::SETTINGS_FILE;
use crate::endpoints::EndpointValidator;
use crate::error::{MigrateError, Result};
use crate::paths::PathResolver;
use crate::scanner::{ArtifactScanner, ScanOutcome};
use crate::state::{StateStore, TomlStateStore};

/// Drives one migration request through the pipeline
pub struct MigrationEngine {
    state: Box<dyn StateStore>,
}

impl MigrationEngine {
    /// Engine backed by the default on-disk state store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state_store(Box::new(TomlStateStore::default_location()))
    }

    /// Engine with an injected state store.
    #[must_use]
    pub fn with_state_store(state: Box<dyn StateStore>) -> Self {
        Self { state }
    }

    /// Destination of the most recent successful migration, if any.
    #[must_use]
    pub fn last_target_dir(&self) -> Option<String> {
        self.state.load().last_target_dir
    }

    /// Run one migration, folding every result into a [`MigrationOutcome`].
    #[must_use]
    pub fn migrate(&self, request: &MigrationRequest) -> MigrationOutcome {
        match self.try_migrate(request) {
            Ok(summary) => MigrationReporter::success(summary),
            Err(err) => MigrationReporter::failure(&err),
        }
    }

    /// Run one migration, surfacing the typed error for callers that need
    /// to branch on the failure kind.
    ///
    /// # Errors
    ///
    /// Returns the first [`MigrateError`] the pipeline hits. Completed copy
    /// actions and directories created while preparing the target are not
    /// rolled back.
    pub fn try_migrate(&self, request: &MigrationRequest) -> Result<MigrationSummary> {
        let source_input = request.source_dir.trim();
        let target_input = request.target_dir.trim();
        if source_input.is_empty() || target_input.is_empty() {
            return Err(MigrateError::InvalidInput);
        }

        let source_root = PathResolver::resolve(source_input);
        let target_root = PathResolver::resolve(target_input);

        EndpointValidator::validate_source(&source_root)?;
        EndpointValidator::prepare_target(&target_root)?;

        let ScanOutcome { actions, missing } = ArtifactScanner::scan(&source_root, &target_root);

        CopyExecutor::execute(&actions)?;

        if request.disable_tutorial {
            if let Some(settings) = Self::copied_settings_file(&actions) {
                TutorialRewriter::disable(settings)?;
            }
        }

        let mut warnings = Vec::new();
        let mut state = self.state.load();
        state.last_target_dir = Some(target_root.to_string_lossy().into_owned());
        if let Err(err) = self.state.save(&state) {
            warnings.push(format!("could not save last target directory: {err}"));
        }

        Ok(MigrationSummary { missing, warnings })
    }

    /// Destination of the settings file, when its copy action actually ran.
    ///
    /// The tutorial rewrite is gated on this: a requested rewrite with no
    /// copied settings file is a no-op, not an error.
    fn copied_settings_file(actions: &[CopyAction]) -> Option<&Path> {
        actions.iter().find_map(|action| match action {
            CopyAction::File { artifact, dest, .. }
                if artifact.relative_path == SETTINGS_FILE =>
            {
                Some(dest.as_path())
            }
            _ => None,
        })
    }
}

impl Default for MigrationEngine {
    fn default() -> Self {
        Self::new()
    }
}

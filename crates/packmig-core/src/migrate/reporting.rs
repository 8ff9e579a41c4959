//! Outcome summarization

use super::{MigrationOutcome, MigrationSummary};
use crate::error::MigrateError;

/// Folds pipeline results into the terminal [`MigrationOutcome`]
pub struct MigrationReporter;

impl MigrationReporter {
    /// Successful run, possibly with skipped artifacts and warnings.
    ///
    /// Missing-but-optional artifacts never fail a migration; they are
    /// listed in a comma-separated aside on the success message.
    #[must_use]
    pub fn success(summary: MigrationSummary) -> MigrationOutcome {
        let MigrationSummary { missing, warnings } = summary;

        let message = if missing.is_empty() {
            "Migration completed.".to_string()
        } else {
            format!(
                "Migration completed. Skipped missing artifacts: {}",
                missing.join(", ")
            )
        };

        MigrationOutcome {
            ok: true,
            message,
            missing,
            warnings,
        }
    }

    /// Failed run. The scanner's missing list is not merged into failures;
    /// the failing step's own message is all the caller sees.
    #[must_use]
    pub fn failure(error: &MigrateError) -> MigrationOutcome {
        MigrationOutcome {
            ok: false,
            message: error.to_string(),
            missing: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_without_missing() {
        let outcome = MigrationReporter::success(MigrationSummary::default());
        assert!(outcome.ok);
        assert_eq!(outcome.message, "Migration completed.");
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_success_lists_skipped_artifacts() {
        let outcome = MigrationReporter::success(MigrationSummary {
            missing: vec!["journeymap/".to_string(), "servers.dat".to_string()],
            warnings: Vec::new(),
        });

        assert!(outcome.ok);
        assert_eq!(
            outcome.message,
            "Migration completed. Skipped missing artifacts: journeymap/, servers.dat"
        );
    }

    #[test]
    fn test_failure_discards_missing_list() {
        let outcome = MigrationReporter::failure(&MigrateError::InvalidInput);
        assert!(!outcome.ok);
        assert!(outcome.missing.is_empty());
        assert_eq!(
            outcome.message,
            "both source and target directories must be provided"
        );
    }
}

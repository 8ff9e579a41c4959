//! Post-copy rewrite of the copied settings file
//!
//! Runs only when the caller asked for it and the settings file was
//! actually copied. A failure here fails the whole migration even though
//! the copies already succeeded and remain on disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{MigrateError, Result};

/// Key prefix of the tutorial line in the settings file
const TUTORIAL_KEY: &str = "tutorialStep:";

/// Replacement line written when the tutorial is disabled
const TUTORIAL_DISABLED: &str = "tutorialStep:none";

/// Rewrites the tutorial flag in a copied settings file
pub struct TutorialRewriter;

impl TutorialRewriter {
    /// Force the tutorial flag in `settings_file` to `none`.
    ///
    /// The first `tutorialStep:` line is replaced wholesale; when no such
    /// line exists one is appended at the end of the file. CRLF line
    /// endings are normalized to bare newlines on write-back.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::PostProcessFailed`] when the file cannot be
    /// read or written.
    pub fn disable(settings_file: &Path) -> Result<()> {
        let text =
            fs::read_to_string(settings_file).map_err(|err| Self::failed(settings_file, err))?;

        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        match lines.iter().position(|line| line.starts_with(TUTORIAL_KEY)) {
            Some(index) => lines[index] = TUTORIAL_DISABLED,
            None => lines.push(TUTORIAL_DISABLED),
        }

        fs::write(settings_file, lines.join("\n"))
            .map_err(|err| Self::failed(settings_file, err))
    }

    fn failed(path: &Path, source: io::Error) -> MigrateError {
        MigrateError::PostProcessFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

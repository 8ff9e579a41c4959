//! Persisted last-target state
//!
//! The engine remembers the destination of the most recent successful
//! migration so the next run can offer it as the source. Persistence is a
//! convenience, not a correctness requirement: loading never fails and a
//! failed save is reported as a warning, never as a migration failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Durable record keyed by application identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Destination directory of the most recent successful migration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_target_dir: Option<String>,
}

/// Storage for the persisted migration state
///
/// Injected into [`crate::MigrationEngine`] so the engine stays free of
/// ambient state and is independently testable.
pub trait StateStore {
    /// Read the current record, or the empty record when none is readable.
    fn load(&self) -> PersistedState;

    /// Overwrite the record on disk. Best-effort; callers must tolerate
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the record cannot be written.
    fn save(&self, state: &PersistedState) -> io::Result<()>;
}

/// TOML-backed store under the platform config directory
#[derive(Debug, Clone)]
pub struct TomlStateStore {
    path: PathBuf,
}

impl TomlStateStore {
    /// Store at the default platform location
    /// (`<config dir>/packmig/state.toml`).
    #[must_use]
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("packmig").join("state.toml"),
        }
    }

    /// Store at an explicit path. Used by `--state-file` and by tests.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for TomlStateStore {
    fn load(&self) -> PersistedState {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, state: &PersistedState) -> io::Result<()> {
        let payload = toml::to_string_pretty(state).map_err(io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_empty_record() {
        let tmp = TempDir::new().unwrap();
        let store = TomlStateStore::at(tmp.path().join("state.toml"));

        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn test_load_corrupt_file_returns_empty_record() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = TomlStateStore::at(path);
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = TomlStateStore::at(tmp.path().join("nested/state.toml"));

        let state = PersistedState {
            last_target_dir: Some("/packs/new".to_string()),
        };
        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let tmp = TempDir::new().unwrap();
        let store = TomlStateStore::at(tmp.path().join("state.toml"));

        store
            .save(&PersistedState {
                last_target_dir: Some("/packs/old".to_string()),
            })
            .unwrap();
        store
            .save(&PersistedState {
                last_target_dir: Some("/packs/new".to_string()),
            })
            .unwrap();

        assert_eq!(store.load().last_target_dir.as_deref(), Some("/packs/new"));
    }
}

//! Command implementations

mod last_target;
mod migrate;

use std::path::Path;

pub use last_target::LastTarget;
pub use migrate::Migrate;
use packmig_core::state::TomlStateStore;

/// Build the state store, honoring a `--state-file` override.
pub(crate) fn state_store(state_file: Option<&Path>) -> TomlStateStore {
    match state_file {
        Some(path) => TomlStateStore::at(path.to_path_buf()),
        None => TomlStateStore::default_location(),
    }
}

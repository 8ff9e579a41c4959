//! Source and target endpoint validation

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{MigrateError, Result};

/// Validates migration endpoints and prepares the target directory
pub struct EndpointValidator;

impl EndpointValidator {
    /// Confirm the source directory exists and is readable.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::SourceUnreadable`] with the OS error when the
    /// directory is absent or cannot be listed.
    pub fn validate_source(source: &Path) -> Result<()> {
        fs::read_dir(source)
            .map(|_| ())
            .map_err(|source| MigrateError::SourceUnreadable { source })
    }

    /// Confirm the target is a writable directory, creating it if absent.
    ///
    /// Creation (including missing parents) is idempotent preparation:
    /// directories created here stay in place even if a later phase fails.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::TargetNotDirectory`] when the path exists as
    /// a non-directory, [`MigrateError::TargetUnwritable`] when it exists
    /// without read+write access, and [`MigrateError::TargetCreateFailed`]
    /// when it does not exist and cannot be created.
    pub fn prepare_target(target: &Path) -> Result<()> {
        match fs::metadata(target) {
            Ok(meta) if !meta.is_dir() => Err(MigrateError::TargetNotDirectory {
                path: target.to_path_buf(),
            }),
            Ok(meta) => {
                if meta.permissions().readonly() {
                    return Err(MigrateError::TargetUnwritable {
                        source: io::Error::from(io::ErrorKind::PermissionDenied),
                    });
                }
                fs::read_dir(target)
                    .map(|_| ())
                    .map_err(|source| MigrateError::TargetUnwritable { source })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(target)
                .map_err(|source| MigrateError::TargetCreateFailed { source }),
            Err(source) => Err(MigrateError::TargetUnwritable { source }),
        }
    }
}

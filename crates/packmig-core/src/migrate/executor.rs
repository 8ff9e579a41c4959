//! Copy action execution
//!
//! Actions run strictly in scanner order, one at a time. The first failing
//! action aborts the run; actions already completed are left on disk (no
//! rollback) and actions not yet attempted never run. No retries, no
//! post-copy verification.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::actions::CopyAction;
use crate::error::{MigrateError, Result};

/// Executes copy actions in order, stopping at the first failure
pub struct CopyExecutor;

impl CopyExecutor {
    /// Run every action in order.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::CopyFailed`] for the first action that fails;
    /// the error embeds the OS error and the path involved.
    pub fn execute(actions: &[CopyAction]) -> Result<()> {
        for action in actions {
            match action {
                CopyAction::File { source, dest, .. } => Self::copy_file(source, dest)?,
                CopyAction::Directory { source, dest, .. } => Self::copy_directory(source, dest)?,
            }
        }
        Ok(())
    }

    /// Copy one file, replacing any existing destination file.
    fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|err| Self::failed(parent, err))?;
        }
        fs::copy(source, dest).map_err(|err| Self::failed(source, err))?;
        Ok(())
    }

    /// Merge a directory tree into the destination.
    ///
    /// Files at matching relative paths are replaced; files only present at
    /// the destination are left untouched. This is a merge, not a mirror.
    fn copy_directory(source: &Path, dest: &Path) -> Result<()> {
        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|err| Self::failed(source, err.into()))?;
            let rel = entry
                .path()
                .strip_prefix(source)
                .expect("walkdir yields paths under its root");
            let target = dest.join(rel);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|err| Self::failed(&target, err))?;
            } else {
                Self::copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn failed(path: &Path, source: io::Error) -> MigrateError {
        MigrateError::CopyFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::artifacts::ARTIFACTS;

    fn file_action(source: &Path, dest: &Path) -> CopyAction {
        CopyAction::for_spec(&ARTIFACTS[0], source.to_path_buf(), dest.to_path_buf())
    }

    fn dir_action(source: &Path, dest: &Path) -> CopyAction {
        CopyAction::for_spec(&ARTIFACTS[1], source.to_path_buf(), dest.to_path_buf())
    }

    #[test]
    fn test_file_copy_overwrites_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("options.txt");
        let dst = tmp.path().join("out/options.txt");
        fs::write(&src, "fov:1.0\n").unwrap();
        fs::create_dir(tmp.path().join("out")).unwrap();
        fs::write(&dst, "fov:0.5\n").unwrap();

        CopyExecutor::execute(&[file_action(&src, &dst)]).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "fov:1.0\n");
    }

    #[test]
    fn test_directory_copy_nested() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("journeymap");
        let dst = tmp.path().join("out/journeymap");
        fs::create_dir_all(src.join("data/waypoints")).unwrap();
        fs::write(src.join("config.json"), "{}").unwrap();
        fs::write(src.join("data/waypoints/home.json"), "{\"x\":0}").unwrap();

        CopyExecutor::execute(&[dir_action(&src, &dst)]).unwrap();

        assert!(dst.join("config.json").exists());
        assert_eq!(
            fs::read_to_string(dst.join("data/waypoints/home.json")).unwrap(),
            "{\"x\":0}"
        );
    }

    #[test]
    fn test_directory_copy_empty() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("journeymap");
        let dst = tmp.path().join("out/journeymap");
        fs::create_dir(&src).unwrap();

        CopyExecutor::execute(&[dir_action(&src, &dst)]).unwrap();

        assert!(dst.is_dir());
    }

    #[test]
    fn test_directory_copy_merges_without_deleting() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("journeymap");
        let dst = tmp.path().join("out/journeymap");
        fs::create_dir(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("config.json"), "new").unwrap();
        fs::write(dst.join("config.json"), "old").unwrap();
        fs::write(dst.join("local-only.json"), "keep me").unwrap();

        CopyExecutor::execute(&[dir_action(&src, &dst)]).unwrap();

        assert_eq!(fs::read_to_string(dst.join("config.json")).unwrap(), "new");
        assert_eq!(
            fs::read_to_string(dst.join("local-only.json")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_first_failure_stops_later_actions() {
        let tmp = TempDir::new().unwrap();
        let src_file = tmp.path().join("options.txt");
        let src_dir = tmp.path().join("journeymap");
        let out = tmp.path().join("out");
        fs::write(&src_file, "fov:1.0\n").unwrap();
        fs::create_dir(&src_dir).unwrap();
        fs::write(src_dir.join("config.json"), "{}").unwrap();
        fs::create_dir(&out).unwrap();

        // A regular file at the directory destination makes the second
        // action fail after the first completed.
        fs::write(out.join("journeymap"), "blocker").unwrap();

        let actions = [
            file_action(&src_file, &out.join("options.txt")),
            dir_action(&src_dir, &out.join("journeymap")),
            file_action(&src_file, &out.join("servers.dat")),
        ];
        let err = CopyExecutor::execute(&actions).unwrap_err();

        assert!(matches!(err, MigrateError::CopyFailed { .. }));
        // Completed action stays on disk, later action never ran.
        assert!(out.join("options.txt").exists());
        assert!(!out.join("servers.dat").exists());
    }
}

//! Path expansion and normalization
//!
//! Pure path arithmetic: nothing in this module touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Expands user shorthand and normalizes raw path input to absolute form
pub struct PathResolver;

impl PathResolver {
    /// Resolve a raw user-supplied path into an absolute path.
    ///
    /// Empty input passes through unchanged; callers reject empty endpoints
    /// before use. A leading `~` expands to the invoking user's home
    /// directory. Anything else is a literal path; relative segments resolve
    /// against the process working directory, and `.`/`..` components are
    /// folded away lexically.
    #[must_use]
    pub fn resolve(raw: &str) -> PathBuf {
        if raw.is_empty() {
            return PathBuf::new();
        }

        let expanded = Self::expand_home(raw);
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(expanded),
                Err(_) => expanded,
            }
        };

        Self::normalize(dunce::simplified(&absolute))
    }

    /// Expand a leading `~` to the user's home directory.
    fn expand_home(raw: &str) -> PathBuf {
        if let Some(rest) = raw.strip_prefix('~') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches(['/', '\\']));
            }
        }
        PathBuf::from(raw)
    }

    /// Fold `.` and `..` components without consulting the filesystem.
    fn normalize(path: &Path) -> PathBuf {
        let mut out = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !out.pop() && !out.has_root() {
                        out.push(Component::ParentDir);
                    }
                }
                other => out.push(other),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(PathResolver::resolve(""), PathBuf::new());
    }

    #[test]
    fn test_absolute_path_unchanged() {
        let resolved = PathResolver::resolve("/tmp/modpack");
        assert_eq!(resolved, PathBuf::from("/tmp/modpack"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(PathResolver::resolve("~"), home);
        assert_eq!(PathResolver::resolve("~/modpack"), home.join("modpack"));
    }

    #[test]
    fn test_relative_path_resolves_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(PathResolver::resolve("modpack"), cwd.join("modpack"));
    }

    #[test]
    fn test_dot_segments_are_folded() {
        let resolved = PathResolver::resolve("/tmp/./a/../modpack");
        assert_eq!(resolved, PathBuf::from("/tmp/modpack"));
    }

    #[test]
    fn test_parent_of_root_stays_at_root() {
        let resolved = PathResolver::resolve("/../tmp");
        assert_eq!(resolved, PathBuf::from("/tmp"));
    }
}

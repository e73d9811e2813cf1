//! Path normalization for recent file entries.
//!
//! A directory suite can be opened either as the directory itself or through
//! its initializer file (`__init__.robot`, `__init__.txt`, ...). Both must end
//! up as one entry, so every path is normalized before it is compared, stored
//! or displayed.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Base-name prefix of suite initializer files.
pub const INITIALIZER_PREFIX: &str = "__init__.";

/// Check whether the base name of `path` marks a suite initializer file.
pub fn is_initializer_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(INITIALIZER_PREFIX))
}

/// Normalize a path to its canonical recent-list identity.
///
/// Initializer files map to their containing directory; every other path maps
/// to its absolute, lexically cleaned form. The file does not need to exist.
pub fn normalize_path(path: &Path) -> PathBuf {
    if is_initializer_file(path) {
        let directory = path.parent().unwrap_or_else(|| Path::new(""));
        return absolute(directory);
    }
    absolute(path)
}

/// Name shown in the menu for a normalized path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(error) => {
                tracing::debug!(%error, "current directory unavailable, keeping relative path");
                path.to_path_buf()
            }
        }
    };
    clean(&joined)
}

/// Resolve `.` and `..` without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(cleaned.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

//! Path resolution utilities
//!
//! Input paths are turned into absolute, lexically normalized paths once per
//! invocation. Symlinks are left alone.

use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make `path` absolute against `base`, folding `.` and `..` components
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

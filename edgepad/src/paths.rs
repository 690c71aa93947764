//! Path helpers
//!
//! Input, output and log files live next to the executable unless the
//! command line points somewhere else.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// Returns `None` when the executable path cannot be determined; callers
/// cannot proceed without a base directory.
pub fn base_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Resolve `name` against `base` unless it is already absolute.
pub fn resolve(base: &Path, name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        base.join(name)
    }
}

/// Create the parent directory of `path`, including missing ancestors.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

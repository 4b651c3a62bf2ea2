//! Filesystem utilities for bob.
//!
//! Atomic writes for generated documents, plus the small helpers the
//! adapters share for directories and executable scripts.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{BobError, Result};
use std::fs;
use std::path::Path;

/// Create a directory and all of its parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| BobError::io("create directory", path, e))
}

/// Mark a file as executable by owner, group, and others (`0o755`).
///
/// No-op on platforms without Unix permissions.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| BobError::io("read metadata of", path, e))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| BobError::io("set permissions on", path, e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Whether a file is executable by its owner.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o100 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

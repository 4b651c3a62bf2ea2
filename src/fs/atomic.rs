//! Atomic file writes.
//!
//! Every generated document goes through here so an interrupted run never
//! leaves a half-written `CLAUDE.md` or `settings.json` behind.
//!
//! 1. Write content to `.{filename}.tmp` next to the target
//! 2. Sync the temp file to disk
//! 3. Rename it over the target
//!
//! On POSIX `rename()` replaces the destination atomically. Elsewhere the
//! destination is removed first when the rename reports it already exists.

use crate::error::{BobError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| BobError::io("create parent directory", parent, e))?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BobError::UserError(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| BobError::io("create temporary file", path, e))?;

    if let Err(e) = file.write_all(content).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(path);
        return Err(BobError::io("write temporary file", path, e));
    }

    Ok(())
}

#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        BobError::io("replace", target, e)
    })
}

#[cfg(not(unix))]
fn replace(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(_) if target.exists() => {
            fs::remove_file(target).map_err(|e| BobError::io("remove", target, e))?;
            fs::rename(source, target).map_err(|e| {
                let _ = fs::remove_file(source);
                BobError::io("replace", target, e)
            })
        }
        Err(e) => {
            let _ = fs::remove_file(source);
            Err(BobError::io("replace", target, e))
        }
    }
}

//! Repair functions for the doctor command.

use crate::error::{BobError, Result};
use crate::fs::{atomic_write_file, ensure_dir, make_executable};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::DoctorReport;

/// Apply safe repairs based on detected issues.
pub fn apply_repairs(report: &mut DoctorReport) -> Result<()> {
    let repairable: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.repairable)
        .cloned()
        .collect();

    for issue in &repairable {
        let Some(path) = issue.path.as_deref().map(PathBuf::from) else {
            continue;
        };

        match issue.category.as_str() {
            "missing_directory" => {
                if !path.exists() {
                    ensure_dir(&path)?;
                    report
                        .repairs
                        .push(format!("Created directory: {}", path.display()));
                }
            }
            "invalid_settings" => {
                let backup = reset_document(&path)?;
                report.repairs.push(format!(
                    "Reset {} to {{}} (backup: {})",
                    path.display(),
                    backup.display()
                ));
            }
            "hook_not_executable" => {
                make_executable(&path)?;
                report
                    .repairs
                    .push(format!("Marked executable: {}", path.display()));
            }
            _ => {}
        }
    }

    info!(repairs = report.repairs.len(), "doctor repairs applied");
    Ok(())
}

/// Path a malformed document is copied to before it is reset.
pub fn backup_path(path: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".bak.{}", stamp));
    PathBuf::from(name)
}

/// Copy a document aside and replace it with an empty JSON object.
fn reset_document(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| BobError::io("back up", path, e))?;
    atomic_write_file(path, "{}\n")?;
    Ok(backup)
}

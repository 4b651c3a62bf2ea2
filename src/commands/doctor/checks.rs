//! Health check functions for the doctor command.

use crate::adapters::Adapter;
use crate::adapters::guards::GUARDS;
use crate::adapters::settings::{read_object, registered_hook_commands};
use crate::error::{BobError, Result};
use crate::fs::is_executable;
use crate::templates::frontmatter;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::{DoctorReport, Issue, IssueSeverity};

/// Unrendered Tera expressions or tags.
static LEFTOVER_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[^}\n]*\}\}|\{%[^%\n]*%\}").expect("Invalid template syntax regex")
});

/// Prefix Claude Code expands to the project root in hook commands.
const PROJECT_DIR_PREFIX: &str = "$CLAUDE_PROJECT_DIR/";

/// Directory holding workflow commands.
fn commands_dir(adapter: &dyn Adapter) -> Option<PathBuf> {
    adapter.workflow_path("_").parent().map(Path::to_path_buf)
}

/// Directory holding subagent definitions.
fn agents_dir(adapter: &dyn Adapter) -> Option<PathBuf> {
    adapter.subagent_path("_").parent().map(Path::to_path_buf)
}

/// Regular files directly inside `dir`, sorted. A missing directory is empty.
fn files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BobError::io("read directory", dir, e))? {
        let path = entry
            .map_err(|e| BobError::io("read directory", dir, e))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Generated text documents: the rules file plus installed workflows and subagents.
fn generated_documents(adapter: &dyn Adapter) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    let rules = adapter.rules_path();
    if rules.is_file() {
        documents.push(rules);
    }
    for dir in [commands_dir(adapter), agents_dir(adapter)].into_iter().flatten() {
        documents.extend(files_in(&dir)?);
    }
    Ok(documents)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BobError::io("read", path, e))
}

/// Check that the rules document has been generated.
pub fn check_rules_present(adapter: &dyn Adapter, report: &mut DoctorReport) {
    let rules = adapter.rules_path();
    if !rules.exists() {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "missing_rules",
                "Rules document has not been generated",
            )
            .with_path(&rules)
            .with_remediation(&format!(
                "bob generate-rules --agent-type {}",
                adapter.agent_name()
            )),
        );
    }
}

/// Check that the workflow and subagent directories exist.
pub fn check_document_directories(adapter: &dyn Adapter, report: &mut DoctorReport) {
    let dirs = [
        (commands_dir(adapter), "Workflow commands directory does not exist"),
        (agents_dir(adapter), "Subagents directory does not exist"),
    ];
    for (dir, description) in dirs {
        let Some(dir) = dir else { continue };
        if !dir.exists() {
            report.issues.push(
                Issue::new(IssueSeverity::Warning, "missing_directory", description)
                    .with_path(&dir)
                    .with_remediation("bob install-workflows")
                    .repairable(),
            );
        }
    }
}

/// Check that settings and MCP documents are JSON objects.
pub fn check_json_documents(adapter: &dyn Adapter, report: &mut DoctorReport) {
    for path in [adapter.settings_path(), adapter.mcp_config_path()] {
        if !path.exists() {
            continue;
        }
        if let Err(e) = read_object(&path) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "invalid_settings",
                    "Document is not a valid JSON object",
                )
                .with_path(&path)
                .with_remediation(&format!(
                    "{}\nRepair backs up the file and resets it to {{}}.",
                    e.to_string().lines().next().unwrap_or_default()
                ))
                .repairable(),
            );
        }
    }
}

/// Check that every generated document's frontmatter parses as YAML.
pub fn check_frontmatter(adapter: &dyn Adapter, report: &mut DoctorReport) -> Result<()> {
    for path in generated_documents(adapter)? {
        if let Err(e) = frontmatter::validate(&read(&path)?) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "invalid_frontmatter",
                    &format!("Frontmatter is not valid YAML: {}", e),
                )
                .with_path(&path)
                .with_remediation(
                    "Fix the frontmatter by hand, or delete the file and re-install it",
                ),
            );
        }
    }
    Ok(())
}

/// Check generated documents for template syntax that was never rendered.
pub fn check_template_leftovers(adapter: &dyn Adapter, report: &mut DoctorReport) -> Result<()> {
    for path in generated_documents(adapter)? {
        let content = read(&path)?;
        if let Some(found) = LEFTOVER_SYNTAX.find(&content) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Warning,
                    "template_leftover",
                    &format!("Unrendered template syntax: {}", found.as_str()),
                )
                .with_path(&path)
                .with_remediation("Regenerate the file, passing missing values with --var"),
            );
        }
    }
    Ok(())
}

/// Script paths referenced by registered hook commands.
pub fn hook_script_paths(adapter: &dyn Adapter) -> Vec<PathBuf> {
    let Ok(settings) = read_object(&adapter.settings_path()) else {
        return Vec::new();
    };

    registered_hook_commands(&settings, "PreToolUse")
        .iter()
        .filter_map(|command| shell_words::split(command).ok())
        .filter_map(|words| words.into_iter().next())
        .filter_map(|program| {
            program
                .strip_prefix(PROJECT_DIR_PREFIX)
                .map(|relative| adapter.target_path().join(relative))
        })
        .collect()
}

/// Check that hook scripts exist and are executable.
///
/// Covers scripts referenced from settings and any bundled guard script
/// already present on disk.
pub fn check_hook_scripts(adapter: &dyn Adapter, report: &mut DoctorReport) {
    let mut scripts = hook_script_paths(adapter);
    let installed: Vec<PathBuf> = adapter
        .guard_paths(&[])
        .into_iter()
        .filter(|p| p.extension().is_some_and(|e| e == "sh") && p.exists())
        .collect();
    for path in installed {
        if !scripts.contains(&path) {
            scripts.push(path);
        }
    }

    for script in scripts {
        if !script.exists() {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "missing_hook_script",
                    "Registered hook script does not exist",
                )
                .with_path(&script)
                .with_remediation(&format!(
                    "bob install-hooks --agent-type {} (available: {})",
                    adapter.agent_name(),
                    GUARDS.iter().map(|g| g.name).collect::<Vec<_>>().join(", ")
                )),
            );
        } else if !is_executable(&script) {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Error,
                    "hook_not_executable",
                    "Hook script is not executable",
                )
                .with_path(&script)
                .with_remediation(&format!("chmod +x {}", script.display()))
                .repairable(),
            );
        }
    }
}

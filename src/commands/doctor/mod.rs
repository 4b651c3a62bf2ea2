//! Implementation of the `bob doctor` command.
//!
//! Diagnoses scaffolding health and optionally repairs detected issues.
//!
//! # Read-only mode (default)
//!
//! Reports:
//! - Missing rules document
//! - Missing workflow or subagent directories
//! - Settings or MCP documents that are not valid JSON objects
//! - Workflow, subagent, and rules files whose frontmatter is not valid YAML
//! - Leftover template syntax (`{{ ... }}`, `{% ... %}`) in generated files
//! - Hook scripts that are missing or not executable
//!
//! # Repair mode (`--repair --force`)
//!
//! Safe repairs only:
//! - Recreate missing directories
//! - Back up a malformed settings document and reset it to `{}`
//! - Mark hook scripts executable

mod checks;
mod display;
mod repairs;


use crate::adapters::Adapter;
use crate::cli::DoctorArgs;
use crate::context::ScaffoldContext;
use crate::error::{BobError, Result};
use std::path::{Path, PathBuf};

pub use checks::*;
pub use display::*;
pub use repairs::*;

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Warning: potential problem but not critical.
    Warning,
    /// Error: something is wrong and should be fixed.
    Error,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "WARNING"),
            IssueSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// A detected issue with a recommended fix.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: IssueSeverity,
    /// Category of the issue (drives which repair applies).
    pub category: String,
    pub description: String,
    /// Path involved.
    pub path: Option<String>,
    /// Recommended remediation command or action.
    pub remediation: Option<String>,
    /// Whether this issue can be auto-repaired.
    pub repairable: bool,
}

impl Issue {
    pub fn new(severity: IssueSeverity, category: &str, description: &str) -> Self {
        Self {
            severity,
            category: category.to_string(),
            description: description.to_string(),
            path: None,
            remediation: None,
            repairable: false,
        }
    }

    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.display().to_string());
        self
    }

    pub fn with_remediation(mut self, remediation: &str) -> Self {
        self.remediation = Some(remediation.to_string());
        self
    }

    pub fn repairable(mut self) -> Self {
        self.repairable = true;
        self
    }
}

/// Result of running the doctor check.
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Agent whose layout was checked.
    pub agent: String,
    /// Target repository that was checked.
    pub target: PathBuf,
    /// List of detected issues.
    pub issues: Vec<Issue>,
    /// List of repairs that were performed (in repair mode).
    pub repairs: Vec<String>,
}

impl DoctorReport {
    /// An empty report for one adapter's layout.
    pub fn for_adapter(adapter: &dyn Adapter) -> Self {
        Self {
            agent: adapter.agent_name().to_string(),
            target: adapter.target_path().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn by_category(&self, category: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }
}

/// Run every check against one adapter's layout.
pub fn run_checks(adapter: &dyn Adapter) -> Result<DoctorReport> {
    let mut report = DoctorReport::for_adapter(adapter);

    check_rules_present(adapter, &mut report);
    check_document_directories(adapter, &mut report);
    check_json_documents(adapter, &mut report);
    check_frontmatter(adapter, &mut report)?;
    check_template_leftovers(adapter, &mut report)?;
    check_hook_scripts(adapter, &mut report);

    Ok(report)
}

/// Execute the `bob doctor` command.
pub fn cmd_doctor(args: DoctorArgs) -> Result<()> {
    if args.repair && !args.force {
        return Err(BobError::UserError(
            "refusing to repair without --force flag.\n\n\
             Repairs may reset settings files. Please review the issues first with `bob doctor`,\n\
             then run `bob doctor --repair --force` to apply safe repairs."
                .to_string(),
        ));
    }

    let ctx = ScaffoldContext::resolve(&args.target)?;
    let adapter = ctx.adapter()?;

    let mut report = run_checks(adapter.as_ref())?;

    // A dry run reports like read-only mode.
    let repair = args.repair && !ctx.dry_run;
    if repair {
        apply_repairs(&mut report)?;
    }

    print_report(&report, repair);

    if !repair && report.has_issues() {
        return Err(BobError::ValidationError(format!(
            "Found {} issue(s). Run `bob doctor --repair --force` to apply safe repairs.",
            report.issues.len()
        )));
    }

    let remaining = report.issues.iter().filter(|i| !i.repairable).count();
    if repair && remaining > 0 {
        return Err(BobError::ValidationError(format!(
            "Repairs applied, but {} issue(s) remain that cannot be auto-repaired.",
            remaining
        )));
    }

    Ok(())
}

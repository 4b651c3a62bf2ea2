//! Implementation of the `bob status` command.
//!
//! Read-only environment diagnostics: the git repository, common project
//! files, and which of the agent's files exist.

use super::table::print_table;
use crate::cli::TargetArgs;
use crate::context::ScaffoldContext;
use crate::error::Result;
use tracing::{info, warn};

/// Project files worth reporting, with a short description.
const PROJECT_FILES: &[(&str, &str)] = &[
    ("README.md", "Project documentation"),
    (".gitignore", "Git ignore rules"),
    (".pre-commit-config.yaml", "Pre-commit hooks"),
    ("Cargo.toml", "Rust project config"),
    ("pyproject.toml", "Python project config"),
    ("package.json", "Node project config"),
];

/// One diagnostics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub check: String,
    pub found: bool,
    pub details: String,
}

impl StatusRow {
    fn new(check: impl Into<String>, found: bool, details: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            found,
            details: details.into(),
        }
    }

    fn cells(&self) -> Vec<String> {
        let status = if self.found { "found" } else { "missing" };
        vec![self.check.clone(), status.to_string(), self.details.clone()]
    }
}

/// Collect the diagnostics rows for a resolved context.
pub fn collect_status(ctx: &ScaffoldContext) -> Result<Vec<StatusRow>> {
    let mut rows = Vec::new();
    let target = &ctx.target;
    let adapter = ctx.adapter()?;

    rows.push(StatusRow::new(
        "Target directory",
        adapter.validate_environment(),
        target.display().to_string(),
    ));

    let git_dir = target.join(".git");
    rows.push(if git_dir.exists() {
        StatusRow::new("Git repository", true, git_dir.display().to_string())
    } else {
        warn!(target = %target.display(), "not a git repository");
        StatusRow::new("Git repository", false, "not a git repository")
    });

    for (name, description) in PROJECT_FILES {
        rows.push(StatusRow::new(*name, target.join(name).exists(), *description));
    }

    let agent_files = [
        (adapter.rules_path(), "rules"),
        (adapter.settings_path(), "settings"),
        (adapter.mcp_config_path(), "MCP servers"),
        (crate::config::Config::path_for(target), "bob config"),
    ];
    for (path, what) in agent_files {
        rows.push(StatusRow::new(
            ctx.display_path(&path),
            path.exists(),
            format!("{} ({})", what, ctx.agent_type),
        ));
    }

    Ok(rows)
}

pub fn cmd_status(args: TargetArgs) -> Result<()> {
    info!("status command invoked");
    let ctx = ScaffoldContext::resolve(&args)?;

    let rows = collect_status(&ctx)?;
    println!("Project status: {}", ctx.target.display());
    println!();
    let cells: Vec<Vec<String>> = rows.iter().map(StatusRow::cells).collect();
    print_table(&["Check", "Status", "Details"], &cells);
    Ok(())
}

//! Implementation of the `bob install-workflows` command.

use crate::adapters::{Adapter, DocumentKind, validate_name};
use crate::cli::InstallWorkflowsArgs;
use crate::context::ScaffoldContext;
use crate::error::{BobError, Result};
use crate::templates::TemplateRenderer;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use tracing::info;

/// Workflow and subagent names selected for installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub workflows: Vec<String>,
    pub subagents: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty() && self.subagents.is_empty()
    }

    /// Keep only names matching `filter`.
    pub fn filtered(self, filter: Option<&GlobSet>) -> Self {
        let Some(filter) = filter else {
            return self;
        };
        let keep = |names: Vec<String>| -> Vec<String> {
            names.into_iter().filter(|n| filter.is_match(n)).collect()
        };
        Self {
            workflows: keep(self.workflows),
            subagents: keep(self.subagents),
        }
    }
}

/// Compile the `--pattern` filter.
pub fn build_filter(pattern: Option<&str>) -> Result<Option<GlobSet>> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };

    let glob = Glob::new(pattern).map_err(|e| {
        BobError::UserError(format!("invalid glob pattern '{}': {}", pattern, e))
    })?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder
        .build()
        .map(Some)
        .map_err(|e| BobError::UserError(format!("failed to compile glob '{}': {}", pattern, e)))
}

/// Names from the command line, or the config defaults when none were given.
fn select(args: &InstallWorkflowsArgs, ctx: &ScaffoldContext) -> Selection {
    if args.workflows.is_empty() && args.subagents.is_empty() {
        Selection {
            workflows: ctx.config.workflows.clone(),
            subagents: ctx.config.subagents.clone(),
        }
    } else {
        Selection {
            workflows: args.workflows.clone(),
            subagents: args.subagents.clone(),
        }
    }
}

/// Install a selection; returns the files written.
pub fn install_selection(
    adapter: &dyn Adapter,
    renderer: &TemplateRenderer,
    selection: &Selection,
) -> Result<Vec<PathBuf>> {
    let mut written = adapter.install_workflows(&selection.workflows, renderer)?;
    written.extend(adapter.install_subagents(&selection.subagents, renderer)?);
    Ok(written)
}

/// Print what `install_selection` would write.
pub fn print_plan(
    adapter: &dyn Adapter,
    renderer: &TemplateRenderer,
    selection: &Selection,
) -> Result<()> {
    let groups = [
        (DocumentKind::Workflow, &selection.workflows),
        (DocumentKind::Subagent, &selection.subagents),
    ];
    for (kind, names) in groups {
        for name in names {
            validate_name(kind, name)?;
            let path = match kind {
                DocumentKind::Workflow => adapter.workflow_path(name),
                DocumentKind::Subagent => adapter.subagent_path(name),
            };
            let source = if renderer.find(kind.category(), name).is_some() {
                "template"
            } else {
                "placeholder"
            };
            println!("  - {} ({})", path.display(), source);
        }
    }
    Ok(())
}

fn print_available(renderer: &TemplateRenderer) {
    for kind in [DocumentKind::Workflow, DocumentKind::Subagent] {
        println!("Available {}:", kind.category());
        for name in renderer.list(kind.category()) {
            println!("  - {}", name);
        }
    }
}

pub fn cmd_install_workflows(args: InstallWorkflowsArgs) -> Result<()> {
    let ctx = ScaffoldContext::resolve(&args.target)?;

    if args.list {
        print_available(&ctx.renderer);
        return Ok(());
    }

    let filter = build_filter(args.pattern.as_deref())?;
    let selection = select(&args, &ctx).filtered(filter.as_ref());
    if selection.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    let adapter = ctx.adapter()?;
    info!(
        agent = %ctx.agent_type,
        workflows = selection.workflows.len(),
        subagents = selection.subagents.len(),
        "install-workflows command invoked"
    );

    if ctx.dry_run {
        println!("Would write:");
        return print_plan(adapter.as_ref(), &ctx.renderer, &selection);
    }

    let written = install_selection(adapter.as_ref(), &ctx.renderer, &selection)?;

    println!("Installed {} file(s):", written.len());
    for path in written {
        println!("  - {}", ctx.display_path(&path));
    }
    Ok(())
}

//! Implementation of the `bob init` command.
//!
//! Scaffolds a repository in one pass:
//!
//! 1. Renders and writes the rules document
//! 2. Applies the settings preset
//! 3. Installs workflows and subagents
//! 4. Installs guards (unless `--no-guards`)
//! 5. Optionally records the choices in `.bob/config.yaml`
//!
//! Every step is idempotent, so re-running `init` refreshes generated files
//! without duplicating hooks or dropping unrelated settings.

use super::defaults::{apply_preset, preset_paths};
use super::workflows::{Selection, install_selection, print_plan};
use crate::cli::InitArgs;
use crate::config::Config;
use crate::context::ScaffoldContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::presets::get_preset;
use crate::templates::generate_rules;
use std::path::PathBuf;
use tracing::info;

/// Files written by each step, in order.
#[derive(Debug, Default)]
pub struct InitSummary {
    pub rules: Vec<PathBuf>,
    pub settings: Vec<PathBuf>,
    pub documents: Vec<PathBuf>,
    pub guards: Vec<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Run every scaffolding step against a resolved context.
pub fn run_init(ctx: &ScaffoldContext, args: &InitArgs) -> Result<InitSummary> {
    let preset_name = args
        .preset
        .clone()
        .unwrap_or_else(|| ctx.config.preset.clone());
    let preset = get_preset(&preset_name)?;
    let adapter = ctx.adapter()?;
    let mut summary = InitSummary::default();

    generate_rules(&ctx.renderer, &ctx.agent_type, &ctx.target, ctx.config_variables())?;
    summary.rules.push(adapter.rules_path());

    summary.settings = apply_preset(adapter.as_ref(), preset)?;

    let selection = Selection {
        workflows: ctx.config.workflows.clone(),
        subagents: ctx.config.subagents.clone(),
    };
    summary.documents = install_selection(adapter.as_ref(), &ctx.renderer, &selection)?;

    if !args.no_guards && !ctx.config.guards.is_empty() {
        summary.guards = adapter.install_guards(&ctx.config.guards, &ctx.renderer)?;
    }

    if args.save_config {
        let config = Config {
            agent_type: ctx.agent_type.clone(),
            preset: preset.name.to_string(),
            ..ctx.config.clone()
        };
        let path = Config::path_for(&ctx.target);
        atomic_write_file(&path, &config.to_yaml()?)?;
        summary.config = Some(path);
    }

    info!(
        agent = %ctx.agent_type,
        preset = preset.name,
        documents = summary.documents.len(),
        guards = summary.guards.len(),
        "init completed"
    );
    Ok(summary)
}

fn print_section(ctx: &ScaffoldContext, title: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }
    println!("{}:", title);
    for path in paths {
        println!("  - {}", ctx.display_path(path));
    }
}

pub fn cmd_init(args: InitArgs) -> Result<()> {
    let ctx = ScaffoldContext::resolve(&args.target)?;
    info!(agent = %ctx.agent_type, target = %ctx.target.display(), "init command invoked");

    if ctx.dry_run {
        let adapter = ctx.adapter()?;
        let preset = get_preset(args.preset.as_deref().unwrap_or(&ctx.config.preset))?;
        println!("Would scaffold {} for {}:", ctx.target.display(), ctx.agent_type);
        println!("  - {} (rules)", adapter.rules_path().display());
        for path in preset_paths(adapter.as_ref()) {
            println!("  - {} (preset {})", path.display(), preset.name);
        }
        let selection = Selection {
            workflows: ctx.config.workflows.clone(),
            subagents: ctx.config.subagents.clone(),
        };
        print_plan(adapter.as_ref(), &ctx.renderer, &selection)?;
        if !args.no_guards && !ctx.config.guards.is_empty() {
            for path in adapter.guard_paths(&ctx.config.guards) {
                println!("  - {} (guards)", path.display());
            }
        }
        if args.save_config {
            println!("  - {} (config)", Config::path_for(&ctx.target).display());
        }
        return Ok(());
    }

    let summary = run_init(&ctx, &args)?;

    println!("Scaffolded {} for {}.", ctx.target.display(), ctx.agent_type);
    print_section(&ctx, "Rules", &summary.rules);
    print_section(&ctx, "Settings", &summary.settings);
    print_section(&ctx, "Workflows and subagents", &summary.documents);
    print_section(&ctx, "Guards", &summary.guards);
    if let Some(path) = &summary.config {
        print_section(&ctx, "Config", std::slice::from_ref(path));
    }
    Ok(())
}

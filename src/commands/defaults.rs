//! Implementation of the `bob apply-defaults` command.

use super::table::print_table;
use crate::adapters::Adapter;
use crate::cli::ApplyDefaultsArgs;
use crate::context::ScaffoldContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::presets::{Preset, get_preset, list_presets};
use std::path::PathBuf;
use tracing::info;

/// Summary file Cursor reads alongside its settings.
const CURSORRULES_FILE: &str = ".cursorrules";

/// Files `apply_preset` writes for this adapter.
pub fn preset_paths(adapter: &dyn Adapter) -> Vec<PathBuf> {
    let mut paths = vec![adapter.settings_path()];
    if adapter.agent_name() == "cursor" {
        paths.push(adapter.target_path().join(CURSORRULES_FILE));
    }
    paths
}

/// Merge a preset into the adapter's settings; returns the files written.
pub fn apply_preset(adapter: &dyn Adapter, preset: &Preset) -> Result<Vec<PathBuf>> {
    let agent = adapter.agent_name();
    let settings = preset.settings_for(agent)?;
    let mut written = vec![adapter.configure_settings(settings)?];

    if agent == "cursor" {
        let path = adapter.target_path().join(CURSORRULES_FILE);
        atomic_write_file(&path, &preset.render_document(agent)?)?;
        written.push(path);
    }

    info!(preset = preset.name, agent, "applied preset");
    Ok(written)
}

fn print_presets() {
    let rows: Vec<Vec<String>> = list_presets()
        .iter()
        .map(|p| {
            vec![
                p.name.to_string(),
                p.description.to_string(),
                p.best_for.to_string(),
            ]
        })
        .collect();
    print_table(&["Preset", "Description", "Best for"], &rows);
}

pub fn cmd_apply_defaults(args: ApplyDefaultsArgs) -> Result<()> {
    if args.list {
        print_presets();
        return Ok(());
    }

    let ctx = ScaffoldContext::resolve(&args.target)?;
    let name = args.preset.unwrap_or_else(|| ctx.config.preset.clone());
    let preset = get_preset(&name)?;
    let adapter = ctx.adapter()?;

    info!(preset = preset.name, agent = %ctx.agent_type, "apply-defaults command invoked");

    if ctx.dry_run {
        println!("Preset '{}' for {}:", preset.name, ctx.agent_type);
        println!();
        println!("{}", preset.render_document(&ctx.agent_type)?);
        println!();
        println!("Would write:");
        for path in preset_paths(adapter.as_ref()) {
            println!("  - {}", path.display());
        }
        return Ok(());
    }

    let written = apply_preset(adapter.as_ref(), preset)?;

    println!("Applied preset '{}' ({}).", preset.name, preset.title());
    for path in written {
        println!("  - {}", path.display());
    }
    Ok(())
}

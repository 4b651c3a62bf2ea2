//! Implementation of the `bob install-hooks` command.

use super::table::print_table;
use crate::adapters::guards::{GUARDS, resolve_guards};
use crate::cli::InstallHooksArgs;
use crate::context::ScaffoldContext;
use crate::error::Result;
use tracing::info;

fn print_guards() {
    let rows: Vec<Vec<String>> = GUARDS
        .iter()
        .map(|g| vec![g.name.to_string(), g.description.to_string()])
        .collect();
    print_table(&["Guard", "Description"], &rows);
}

pub fn cmd_install_hooks(args: InstallHooksArgs) -> Result<()> {
    if args.list {
        print_guards();
        return Ok(());
    }

    let ctx = ScaffoldContext::resolve(&args.target)?;
    let names = if args.guards.is_empty() {
        ctx.config.guards.clone()
    } else {
        args.guards
    };
    if names.is_empty() {
        println!("No guards selected.");
        return Ok(());
    }
    let selected = resolve_guards(&names)?;
    let adapter = ctx.adapter()?;

    info!(agent = %ctx.agent_type, guards = ?names, "install-hooks command invoked");

    if ctx.dry_run {
        println!("Would install {} guard(s):", selected.len());
        for guard in &selected {
            println!("  - {}: {}", guard.name, guard.description);
        }
        println!("Would write:");
        for path in adapter.guard_paths(&names) {
            println!("  - {}", path.display());
        }
        return Ok(());
    }

    let written = adapter.install_guards(&names, &ctx.renderer)?;

    println!("Installed {} guard(s) for {}:", selected.len(), ctx.agent_type);
    for path in written {
        println!("  - {}", ctx.display_path(&path));
    }
    Ok(())
}

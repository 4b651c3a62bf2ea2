//! Implementation of the `bob version` command.

use super::table::print_table;
use crate::adapters::supported_agents;
use crate::error::Result;
use crate::presets::list_presets;
use tracing::info;

pub fn cmd_version() -> Result<()> {
    info!("version command invoked");

    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!();
    println!("Supported agents: {}", supported_agents().join(", "));
    println!();

    let rows: Vec<Vec<String>> = list_presets()
        .iter()
        .map(|p| vec![p.name.to_string(), p.description.to_string()])
        .collect();
    print_table(&["Preset", "Description"], &rows);

    Ok(())
}

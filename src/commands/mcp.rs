//! Implementation of the `bob configure-mcp` command.

use crate::adapters::settings::parse_payload;
use crate::cli::ConfigureMcpArgs;
use crate::context::ScaffoldContext;
use crate::error::{BobError, Result};
use crate::templates::Vars;
use crate::templates::context::parse_assignment;
use serde_json::{Value, json};
use tracing::info;

/// Build one server definition from its flags.
pub fn server_definition(command: &str, args: &[String], env: &[String]) -> Result<Value> {
    let mut definition = json!({ "command": command, "args": args });

    if !env.is_empty() {
        let mut vars = Vars::new();
        for raw in env {
            let (key, value) = parse_assignment(raw)?;
            // Environment values are always strings.
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            vars.insert(key, Value::String(value));
        }
        definition["env"] = Value::Object(vars);
    }

    Ok(definition)
}

/// Servers named on the command line, keyed by server name.
pub fn servers_from_args(args: &ConfigureMcpArgs) -> Result<Vars> {
    if let Some(raw) = &args.json {
        let servers = parse_payload(raw)?;
        if let Some((name, _)) = servers.iter().find(|(_, def)| !def.is_object()) {
            return Err(BobError::UserError(format!(
                "MCP server '{}' must be a JSON object",
                name
            )));
        }
        return Ok(servers);
    }

    match (&args.server, &args.command) {
        (Some(server), Some(command)) => {
            let mut servers = Vars::new();
            servers.insert(
                server.clone(),
                server_definition(command, &args.args, &args.env)?,
            );
            Ok(servers)
        }
        _ => Err(BobError::UserError(
            "nothing to configure: pass --server NAME --command CMD, or --json '{...}'".to_string(),
        )),
    }
}

pub fn cmd_configure_mcp(args: ConfigureMcpArgs) -> Result<()> {
    let ctx = ScaffoldContext::resolve(&args.target)?;
    let servers = servers_from_args(&args)?;
    if servers.is_empty() {
        return Err(BobError::UserError("no MCP servers given".to_string()));
    }
    let adapter = ctx.adapter()?;

    let names: Vec<String> = servers.keys().cloned().collect();
    info!(agent = %ctx.agent_type, servers = ?names, "configure-mcp command invoked");

    if ctx.dry_run {
        let preview = serde_json::to_string_pretty(&json!({ "mcpServers": servers }))
            .map_err(|e| BobError::UserError(format!("failed to serialize servers: {}", e)))?;
        println!("Would merge into {}:", adapter.mcp_config_path().display());
        println!("{}", preview);
        return Ok(());
    }

    let path = adapter.configure_mcp_servers(servers)?;
    println!(
        "Configured MCP server(s) {} in {}",
        names.join(", "),
        ctx.display_path(&path)
    );
    Ok(())
}

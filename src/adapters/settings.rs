//! Read-modify-write helpers for JSON settings documents.
//!
//! Settings documents are JSON objects. A missing file reads as `{}`. A file
//! that exists but is not a JSON object is reported rather than overwritten,
//! so a hand-edited settings file is never silently clobbered.

use crate::error::{BobError, Result};
use crate::fs::atomic_write_file;
use crate::templates::Vars;
use serde_json::{Value, json};
use std::path::Path;
use tracing::debug;

/// Top-level key holding MCP server definitions.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// Read a settings document; a missing file is an empty object.
pub fn read_object(path: &Path) -> Result<Vars> {
    if !path.exists() {
        return Ok(Vars::new());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| BobError::io("read settings file", path, e))?;
    if content.trim().is_empty() {
        return Ok(Vars::new());
    }

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(BobError::UserError(format!(
            "settings file '{}' is not a JSON object; fix or remove it and re-run",
            path.display()
        ))),
        Err(e) => Err(BobError::UserError(format!(
            "failed to parse settings file '{}': {}\nRun `bob doctor --repair --force` to back it up and reset it.",
            path.display(),
            e
        ))),
    }
}

/// Write a settings document as pretty JSON with a trailing newline.
pub fn write_object(path: &Path, settings: &Vars) -> Result<()> {
    let mut json = serde_json::to_string_pretty(settings).map_err(|e| {
        BobError::UserError(format!("failed to serialize settings for '{}': {}", path.display(), e))
    })?;
    json.push('\n');
    atomic_write_file(path, &json)
}

/// Shallow merge: each top-level key in `updates` replaces the stored value.
pub fn merge_into(path: &Path, updates: Vars) -> Result<Vars> {
    let mut settings = read_object(path)?;
    debug!(path = %path.display(), keys = updates.len(), "merging settings");
    for (key, value) in updates {
        settings.insert(key, value);
    }
    write_object(path, &settings)?;
    Ok(settings)
}

/// Merge server definitions into the `mcpServers` object.
///
/// Each named server replaces any existing definition with that name; other
/// servers and other top-level keys are preserved.
pub fn merge_mcp_servers(path: &Path, servers: Vars) -> Result<Vars> {
    let mut document = read_object(path)?;

    let entry = document
        .entry(MCP_SERVERS_KEY.to_string())
        .or_insert_with(|| json!({}));
    let existing = entry.as_object_mut().ok_or_else(|| {
        BobError::UserError(format!(
            "'{}' in '{}' is not a JSON object",
            MCP_SERVERS_KEY,
            path.display()
        ))
    })?;

    for (name, definition) in servers {
        existing.insert(name, definition);
    }

    write_object(path, &document)?;
    Ok(document)
}

/// Parse a JSON payload supplied on the command line into an object.
pub fn parse_payload(raw: &str) -> Result<Vars> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(BobError::UserError(format!(
            "settings payload must be a JSON object, got: {}",
            other
        ))),
        Err(e) => Err(BobError::UserError(format!("malformed settings payload: {}", e))),
    }
}

/// Register a command hook for `event` under `matcher`.
///
/// Returns `false` when an identical command is already registered.
pub fn register_hook(
    settings: &mut Vars,
    event: &str,
    matcher: &str,
    command: &str,
) -> Result<bool> {
    let malformed = |what: &str| {
        BobError::UserError(format!(
            "settings 'hooks.{}' has an unexpected shape ({}); fix it by hand or run `bob doctor`",
            event, what
        ))
    };

    let hooks = settings
        .entry("hooks".to_string())
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| malformed("hooks is not an object"))?;
    let entries = hooks
        .entry(event.to_string())
        .or_insert_with(|| json!([]))
        .as_array_mut()
        .ok_or_else(|| malformed("event is not a list"))?;

    let position = entries
        .iter()
        .position(|e| e.get("matcher").and_then(Value::as_str) == Some(matcher));

    let hook = json!({ "type": "command", "command": command });

    match position {
        Some(index) => {
            let commands = entries[index]
                .as_object_mut()
                .ok_or_else(|| malformed("matcher entry is not an object"))?
                .entry("hooks".to_string())
                .or_insert_with(|| json!([]))
                .as_array_mut()
                .ok_or_else(|| malformed("matcher hooks is not a list"))?;

            let present = commands
                .iter()
                .any(|h| h.get("command").and_then(Value::as_str) == Some(command));
            if present {
                return Ok(false);
            }
            commands.push(hook);
        }
        None => entries.push(json!({ "matcher": matcher, "hooks": [hook] })),
    }

    Ok(true)
}

/// Commands registered for `event`, across every matcher.
pub fn registered_hook_commands(settings: &Vars, event: &str) -> Vec<String> {
    settings
        .get("hooks")
        .and_then(|h| h.get(event))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.get("hooks").and_then(Value::as_array))
        .flatten()
        .filter_map(|hook| hook.get("command").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

//! The rules document pipeline.

use super::builtin::{CONFIG_PREFIX, RULES_TEMPLATE};
use super::context::{layered, vars};
use super::{TemplateRenderer, Vars};
use crate::adapters::{create_adapter, supported_agents};
use crate::error::{BobError, Result};
use chrono::Local;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load `config/<agent>.yaml` as template variables.
///
/// A missing document means the agent type is not supported.
pub fn load_agent_config(renderer: &TemplateRenderer, agent_type: &str) -> Result<Vars> {
    let name = format!("{}/{}.yaml", CONFIG_PREFIX, agent_type);
    if !renderer.contains(&name) {
        return Err(BobError::UnsupportedAgent {
            requested: agent_type.to_string(),
            supported: supported_agents().into_iter().map(String::from).collect(),
        });
    }

    let parsed: Value = serde_yaml::from_str(renderer.source(&name)?).map_err(|e| {
        BobError::UserError(format!("invalid agent configuration '{}': {}", name, e))
    })?;

    match parsed {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Vars::new()),
        _ => Err(BobError::UserError(format!(
            "invalid agent configuration '{}': expected a mapping",
            name
        ))),
    }
}

/// Variables derived from the target: `project_name` and `generated_date`.
pub fn base_variables(target: &Path) -> Vars {
    let project_name = target
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    vars([
        ("project_name", project_name),
        ("generated_date", Local::now().format("%Y-%m-%d").to_string()),
    ])
}

/// Render the rules document for `agent_type` without writing it.
///
/// Layers, later winning: base variables, the agent configuration document,
/// the adapter's variables, then `extra`.
pub fn render_configure_rules(
    renderer: &TemplateRenderer,
    agent_type: &str,
    target: &Path,
    extra: Vars,
) -> Result<String> {
    let config = load_agent_config(renderer, agent_type)?;
    let adapter = create_adapter(agent_type, target, Some(config.clone()))?;

    let context = layered([
        base_variables(target),
        config,
        adapter.template_variables(),
        extra,
    ]);
    debug!(agent = agent_type, vars = context.len(), "rendering rules");

    Ok(renderer.render(RULES_TEMPLATE, &context)?)
}

/// Render and write the rules document; returns the declared output paths.
pub fn generate_rules(
    renderer: &TemplateRenderer,
    agent_type: &str,
    target: &Path,
    extra: Vars,
) -> Result<Vec<PathBuf>> {
    let content = render_configure_rules(renderer, agent_type, target, extra)?;
    let adapter = create_adapter(agent_type, target, None)?;
    adapter.write_rules(&content)?;
    info!(agent = agent_type, path = %adapter.rules_path().display(), "wrote rules");
    Ok(adapter.output_paths())
}

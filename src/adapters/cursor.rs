//! Cursor adapter.
//!
//! Cursor reads `.mdc` rule files from `.cursor/rules/`. The rules are
//! declared as four categorized files, but the generated document is written
//! as one combined rule file; the categorized paths describe the layout a
//! project may split it into.

use super::guards;
use super::{Adapter, OutputFormat, settings};
use crate::error::{BobError, Result};
use crate::fs::atomic_write_file;
use crate::templates::builtin::SAFETY_RULE_TEMPLATE;
use crate::templates::context::{layered, vars};
use crate::templates::{TemplateRenderer, Vars};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tracing::info;

pub const AGENT_NAME: &str = "cursor";

const CONFIG_DIR: &str = ".cursor";
const RULES_DIR: &str = ".cursor/rules/";
const COMBINED_RULES_FILE: &str = "coding-agent-rules.mdc";
const SAFETY_RULE_FILE: &str = "ai-safety.mdc";

/// Categorized rule files, in display order.
pub const RULE_CATEGORIES: &[&str] = &[
    "development-workflow",
    "code-standards",
    "project-structure",
    "devops-practices",
];

/// Writes `.mdc` rules and settings under `.cursor/`.
#[derive(Debug, Clone)]
pub struct CursorAdapter {
    target: PathBuf,
    settings: Vars,
}

impl CursorAdapter {
    pub fn new(target: PathBuf, settings: Vars) -> Self {
        Self { target, settings }
    }

    pub fn boxed(target: PathBuf, settings: Vars) -> Box<dyn Adapter> {
        Box::new(Self::new(target, settings))
    }

    fn config_dir(&self) -> PathBuf {
        self.target.join(CONFIG_DIR)
    }

    fn rules_dir(&self) -> PathBuf {
        self.config_dir().join("rules")
    }

    fn safety_rule_path(&self) -> PathBuf {
        self.rules_dir().join(SAFETY_RULE_FILE)
    }
}

impl Adapter for CursorAdapter {
    fn target_path(&self) -> &Path {
        &self.target
    }

    fn agent_name(&self) -> &'static str {
        AGENT_NAME
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::MultipleFiles
    }

    fn template_variables(&self) -> Vars {
        layered([
            vars([("agent_type", AGENT_NAME), ("output_file", RULES_DIR)]),
            self.settings.clone(),
        ])
    }

    fn rules_path(&self) -> PathBuf {
        self.rules_dir().join(COMBINED_RULES_FILE)
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        let dir = self.rules_dir();
        RULE_CATEGORIES
            .iter()
            .map(|category| dir.join(format!("{}.mdc", category)))
            .collect()
    }

    fn workflow_path(&self, name: &str) -> PathBuf {
        self.config_dir().join("commands").join(format!("{}.md", name))
    }

    fn subagent_path(&self, name: &str) -> PathBuf {
        self.config_dir().join("agents").join(format!("{}.mdc", name))
    }

    fn settings_path(&self) -> PathBuf {
        self.config_dir().join("settings.json")
    }

    fn mcp_config_path(&self) -> PathBuf {
        self.config_dir().join("mcp.json")
    }

    /// Cursor has no hook runner, so guards become a rule plus a
    /// denied-commands setting.
    fn install_guards(
        &self,
        names: &[String],
        renderer: &TemplateRenderer,
    ) -> Result<Vec<PathBuf>> {
        let selected = guards::resolve_guards(names)?;
        let denied = guards::denied_commands(&selected);

        let context = layered([
            self.template_variables(),
            vars([("denied_commands", json!(denied))]),
        ]);
        let rule = renderer.render(SAFETY_RULE_TEMPLATE, &context)?;
        let rule_path = self.safety_rule_path();
        atomic_write_file(&rule_path, &rule)?;

        let settings_path = self.settings_path();
        let mut document = settings::read_object(&settings_path)?;
        merge_denied_commands(&mut document, &denied).map_err(|what| {
            BobError::UserError(format!(
                "'{}' in '{}' {}",
                DENIED_COMMANDS_KEY,
                settings_path.display(),
                what
            ))
        })?;
        settings::write_object(&settings_path, &document)?;

        info!(count = denied.len(), "installed denied commands");
        Ok(vec![rule_path, settings_path])
    }

    fn guard_paths(&self, _names: &[String]) -> Vec<PathBuf> {
        vec![self.safety_rule_path(), self.settings_path()]
    }
}

/// Flat dotted key, matching the `agent.*` keys the presets write.
const DENIED_COMMANDS_KEY: &str = "agent.deniedCommands";

/// Union `denied` into the `agent.deniedCommands` list, keeping existing entries first.
fn merge_denied_commands(
    document: &mut Vars,
    denied: &[String],
) -> std::result::Result<(), &'static str> {
    let list = document
        .entry(DENIED_COMMANDS_KEY.to_string())
        .or_insert_with(|| json!([]))
        .as_array_mut()
        .ok_or("is not a list")?;

    for command in denied {
        if !list.iter().any(|c| c.as_str() == Some(command.as_str())) {
            list.push(Value::String(command.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_denied_commands_keeps_existing() {
        let mut document = vars([
            ("agent.maxIterations", json!(10)),
            ("agent.deniedCommands", json!(["make deploy"])),
        ]);

        merge_denied_commands(&mut document, &["make deploy".to_string(), "mkfs".to_string()])
            .unwrap();

        assert_eq!(document["agent.deniedCommands"], json!(["make deploy", "mkfs"]));
        assert_eq!(document["agent.maxIterations"], json!(10));
        assert!(!document.contains_key("agent"));
    }

    #[test]
    fn test_merge_denied_commands_rejects_wrong_shape() {
        let mut document = vars([("agent.deniedCommands", json!("mkfs"))]);
        assert!(merge_denied_commands(&mut document, &["mkfs".to_string()]).is_err());
    }

    #[test]
    fn test_declared_paths_follow_categories() {
        let adapter = CursorAdapter::new(PathBuf::from("/repo"), Vars::new());
        let names: Vec<String> = adapter
            .output_paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "development-workflow.mdc",
                "code-standards.mdc",
                "project-structure.mdc",
                "devops-practices.mdc"
            ]
        );
    }
}

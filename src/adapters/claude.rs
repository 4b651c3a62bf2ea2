//! Claude Code adapter.

use super::guards::{self, Guard};
use super::{Adapter, OutputFormat, settings};
use crate::error::Result;
use crate::fs::{atomic_write_file, make_executable};
use crate::templates::context::{layered, vars};
use crate::templates::{TemplateRenderer, Vars};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const AGENT_NAME: &str = "claude-code";

const RULES_FILE: &str = "CLAUDE.md";
const CONFIG_DIR: &str = ".claude";
const HOOK_EVENT: &str = "PreToolUse";
const HOOK_MATCHER: &str = "Bash";

/// Writes a single `CLAUDE.md` and keeps everything else under `.claude/`.
#[derive(Debug, Clone)]
pub struct ClaudeAdapter {
    target: PathBuf,
    settings: Vars,
}

impl ClaudeAdapter {
    pub fn new(target: PathBuf, settings: Vars) -> Self {
        Self { target, settings }
    }

    pub fn boxed(target: PathBuf, settings: Vars) -> Box<dyn Adapter> {
        Box::new(Self::new(target, settings))
    }

    fn config_dir(&self) -> PathBuf {
        self.target.join(CONFIG_DIR)
    }

    fn hook_path(&self, guard: &Guard) -> PathBuf {
        self.config_dir().join("hooks").join(guard.script_file_name())
    }

    /// Hook command, resolved against the project root at run time.
    fn hook_command(guard: &Guard) -> String {
        let relative = format!("{}/hooks/{}", CONFIG_DIR, guard.script_file_name());
        format!("\"$CLAUDE_PROJECT_DIR\"/{}", shell_words::quote(&relative))
    }
}

impl Adapter for ClaudeAdapter {
    fn target_path(&self) -> &Path {
        &self.target
    }

    fn agent_name(&self) -> &'static str {
        AGENT_NAME
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::SingleFile
    }

    fn template_variables(&self) -> Vars {
        layered([
            vars([("agent_type", AGENT_NAME), ("output_file", RULES_FILE)]),
            self.settings.clone(),
        ])
    }

    fn rules_path(&self) -> PathBuf {
        self.target.join(RULES_FILE)
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.rules_path()]
    }

    fn workflow_path(&self, name: &str) -> PathBuf {
        self.config_dir().join("commands").join(format!("{}.md", name))
    }

    fn subagent_path(&self, name: &str) -> PathBuf {
        self.config_dir().join("agents").join(format!("{}.md", name))
    }

    fn settings_path(&self) -> PathBuf {
        self.config_dir().join("settings.json")
    }

    fn mcp_config_path(&self) -> PathBuf {
        self.target.join(".mcp.json")
    }

    fn install_guards(
        &self,
        names: &[String],
        renderer: &TemplateRenderer,
    ) -> Result<Vec<PathBuf>> {
        let selected = guards::resolve_guards(names)?;
        let settings_path = self.settings_path();
        let mut document = settings::read_object(&settings_path)?;
        let mut written = Vec::with_capacity(selected.len() + 1);

        for guard in selected {
            let script = renderer.render(&guard.script_template(), &Vars::new())?;
            let path = self.hook_path(guard);
            atomic_write_file(&path, &script)?;
            make_executable(&path)?;
            written.push(path);

            let command = Self::hook_command(guard);
            if settings::register_hook(&mut document, HOOK_EVENT, HOOK_MATCHER, &command)? {
                info!(guard = guard.name, "registered hook");
            } else {
                debug!(guard = guard.name, "hook already registered");
            }
        }

        settings::write_object(&settings_path, &document)?;
        written.push(settings_path);
        Ok(written)
    }

    fn guard_paths(&self, names: &[String]) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = guards::resolve_guards(names)
            .map(|selected| selected.into_iter().map(|g| self.hook_path(g)).collect())
            .unwrap_or_default();
        paths.push(self.settings_path());
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_command_is_quoted_relative_to_project() {
        let guard = guards::find_guard("protect-secrets").unwrap();
        assert_eq!(
            ClaudeAdapter::hook_command(guard),
            "\"$CLAUDE_PROJECT_DIR\"/.claude/hooks/protect-secrets.sh"
        );
    }

    #[test]
    fn test_settings_override_defaults() {
        let adapter = ClaudeAdapter::new(
            PathBuf::from("/repo"),
            vars([("output_file", "AGENTS.md"), ("model", "opus")]),
        );
        let vars = adapter.template_variables();
        assert_eq!(vars["agent_type"], "claude-code");
        assert_eq!(vars["output_file"], "AGENTS.md");
        assert_eq!(vars["model"], "opus");
    }
}

//! Constants and default value functions used by the Config struct.

use crate::adapters::guards::guard_names;
use crate::presets::DEFAULT_PRESET;
use crate::templates::builtin::{SUBAGENTS_PREFIX, WORKFLOWS_PREFIX, names_under};

/// Directory holding bob's per-project files, relative to the target.
pub const CONFIG_DIR: &str = ".bob";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

pub fn default_agent_type() -> String {
    "claude-code".to_string()
}

pub fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

/// Every bundled workflow.
pub fn default_workflows() -> Vec<String> {
    names_under(WORKFLOWS_PREFIX)
}

/// Every bundled subagent.
pub fn default_subagents() -> Vec<String> {
    names_under(SUBAGENTS_PREFIX)
}

/// Every bundled guard.
pub fn default_guards() -> Vec<String> {
    guard_names().into_iter().map(String::from).collect()
}

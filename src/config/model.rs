//! Config struct definition and default implementation.

use super::types::*;
use crate::templates::Vars;
use serde::{Deserialize, Serialize};

/// Configuration for scaffolding one repository.
///
/// This struct represents the contents of `.bob/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tool to scaffold for when `--agent-type` is not given.
    #[serde(default = "default_agent_type")]
    pub agent_type: String,

    /// Preset applied by `apply-defaults` and `init`.
    #[serde(default = "default_preset")]
    pub preset: String,

    // =========================================================================
    // Installed documents
    // =========================================================================
    /// Workflow commands installed when none are named on the command line.
    #[serde(default = "default_workflows")]
    pub workflows: Vec<String>,

    /// Subagents installed when none are named on the command line.
    #[serde(default = "default_subagents")]
    pub subagents: Vec<String>,

    /// Guards installed by `install-hooks` when none are named.
    #[serde(default = "default_guards")]
    pub guards: Vec<String>,

    // =========================================================================
    // Templates
    // =========================================================================
    /// Template override directory, relative to the target unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,

    /// Extra template variables. `--var` assignments win over these.
    #[serde(default, skip_serializing_if = "Vars::is_empty")]
    pub variables: Vars,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_type: default_agent_type(),
            preset: default_preset(),
            workflows: default_workflows(),
            subagents: default_subagents(),
            guards: default_guards(),
            templates_dir: None,
            variables: Vars::new(),
        }
    }
}

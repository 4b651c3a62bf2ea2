//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_DIR, CONFIG_FILE};
use crate::adapters::guards::find_guard;
use crate::adapters::{DocumentKind, supported_agents, validate_name};
use crate::error::{BobError, Result};
use crate::presets::get_preset;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Path of the config file for a target repository.
    pub fn path_for(target: &Path) -> PathBuf {
        target.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BobError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the target's config, or the defaults when it has none.
    pub fn load_for_target(target: &Path) -> Result<Self> {
        let path = Self::path_for(target);
        if !path.exists() {
            debug!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "loading project config");
        Self::load(&path)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| BobError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BobError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `agent_type` must be a registered adapter
    /// - `preset` must name a known preset
    /// - workflow and subagent names must be usable file stems
    /// - guard names must be bundled guards
    pub fn validate(&self) -> Result<()> {
        if !supported_agents().contains(&self.agent_type.as_str()) {
            return Err(BobError::UserError(format!(
                "config validation failed: unsupported agent_type '{}' (supported: {})",
                self.agent_type,
                supported_agents().join(", ")
            )));
        }

        get_preset(&self.preset)
            .map_err(|e| BobError::UserError(format!("config validation failed: {}", e)))?;

        for (kind, names) in [
            (DocumentKind::Workflow, &self.workflows),
            (DocumentKind::Subagent, &self.subagents),
        ] {
            for name in names {
                validate_name(kind, name)
                    .map_err(|e| BobError::UserError(format!("config validation failed: {}", e)))?;
            }
        }

        for guard in &self.guards {
            if find_guard(guard).is_none() {
                return Err(BobError::UserError(format!(
                    "config validation failed: unknown guard '{}'",
                    guard
                )));
            }
        }

        Ok(())
    }

    /// Resolve `templates_dir` against the target.
    pub fn templates_dir_for(&self, target: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|dir| {
            let dir = Path::new(dir);
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                target.join(dir)
            }
        })
    }
}

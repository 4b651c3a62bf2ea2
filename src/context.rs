//! Target resolution for bob commands.
//!
//! Every command that acts on a repository goes through this module: it
//! checks the target directory, loads `.bob/config.yaml`, settles the agent
//! type (flag, then config, then default), and builds the template renderer
//! with any override directory.

use crate::adapters::{Adapter, create_adapter, supported_agents};
use crate::cli::TargetArgs;
use crate::config::Config;
use crate::error::{BobError, Result};
use crate::templates::context::layered;
use crate::templates::{TemplateRenderer, Vars, base_variables};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a command needs to scaffold one target.
#[derive(Debug)]
pub struct ScaffoldContext {
    /// Absolute path to the target repository.
    pub target: PathBuf,

    /// Resolved agent type.
    pub agent_type: String,

    /// Project config (defaults when the target has none).
    pub config: Config,

    /// Whether to report instead of write.
    pub dry_run: bool,

    /// Renderer over bundled templates plus overrides.
    pub renderer: TemplateRenderer,
}

impl ScaffoldContext {
    /// Resolve a context from the shared command-line options.
    pub fn resolve(args: &TargetArgs) -> Result<Self> {
        let target = resolve_target(&args.target_path)?;
        let config = Config::load_for_target(&target)?;

        let agent_type = args
            .agent_type
            .clone()
            .unwrap_or_else(|| config.agent_type.clone());
        if !supported_agents().contains(&agent_type.as_str()) {
            return Err(BobError::UnsupportedAgent {
                requested: agent_type,
                supported: supported_agents().into_iter().map(String::from).collect(),
            });
        }

        let templates_dir = args
            .templates_dir
            .clone()
            .or_else(|| config.templates_dir_for(&target));
        let renderer = TemplateRenderer::with_overrides(templates_dir.as_deref())?;

        debug!(
            target = %target.display(),
            agent = %agent_type,
            dry_run = args.dry_run,
            "resolved scaffold context"
        );

        Ok(Self {
            target,
            agent_type,
            config,
            dry_run: args.dry_run,
            renderer,
        })
    }

    /// The adapter for the resolved agent type.
    ///
    /// Its variables carry the target-derived values and the project config
    /// `variables`, so workflows, subagents, and guard rules see the same
    /// context as the rules document.
    pub fn adapter(&self) -> Result<Box<dyn Adapter>> {
        let settings = layered([base_variables(&self.target), self.config_variables()]);
        create_adapter(&self.agent_type, &self.target, Some(settings))
    }

    /// Template variables from the project config.
    pub fn config_variables(&self) -> Vars {
        self.config.variables.clone()
    }

    /// Display a path relative to the target when it lies inside it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.target)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Check that the target exists and is a directory, and make it absolute.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(BobError::UserError(format!(
            "Target path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(BobError::UserError(format!(
            "Target path is not a directory: {}",
            path.display()
        )));
    }
    path.canonicalize()
        .map_err(|e| BobError::io("resolve target path", path, e))
}

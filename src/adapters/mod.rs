//! Coding-agent adapters.
//!
//! Each supported tool gets one adapter implementing [`Adapter`]. The
//! adapter owns the tool's on-disk conventions: where rules go, where
//! commands and subagents live, which settings file it reads and writes,
//! and which safety extras it installs. Adapters are looked up by tool
//! identifier through the static table in [`registry`].
//!
//! The shared behavior (best-effort document installation, settings
//! read-modify-write) lives in default methods so each adapter only states
//! its paths and defaults.

mod claude;
mod cursor;
pub mod guards;
mod install;
mod registry;
pub mod settings;

#[cfg(test)]
mod tests;

pub use claude::ClaudeAdapter;
pub use cursor::CursorAdapter;
pub use install::{DocumentKind, RenderedDocument, render_document, validate_name};
pub use registry::{create_adapter, supported_agents};

use crate::error::Result;
use crate::templates::{TemplateRenderer, Vars};
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether an adapter's rules are one file or a set of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    SingleFile,
    MultipleFiles,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::SingleFile => write!(f, "single_file"),
            OutputFormat::MultipleFiles => write!(f, "multiple_files"),
        }
    }
}

/// The per-tool handler contract.
pub trait Adapter {
    /// Repository the adapter writes into.
    fn target_path(&self) -> &Path;

    /// Tool identifier this adapter was registered under.
    fn agent_name(&self) -> &'static str;

    fn output_format(&self) -> OutputFormat;

    /// Template variables: the adapter's defaults with its construction-time
    /// settings layered on top.
    fn template_variables(&self) -> Vars;

    /// The file `write_rules` writes.
    fn rules_path(&self) -> PathBuf;

    /// Declared rule file layout, without writing anything.
    fn output_paths(&self) -> Vec<PathBuf>;

    /// Write the rendered rules, replacing any previous content.
    fn write_rules(&self, content: &str) -> Result<()> {
        crate::fs::atomic_write_file(self.rules_path(), content)
    }

    /// Where the workflow command `name` is installed.
    fn workflow_path(&self, name: &str) -> PathBuf;

    /// Where the subagent `name` is installed.
    fn subagent_path(&self, name: &str) -> PathBuf;

    /// The tool's settings document.
    fn settings_path(&self) -> PathBuf;

    /// The tool's MCP server configuration document.
    fn mcp_config_path(&self) -> PathBuf;

    /// Install workflow commands by name.
    ///
    /// Names without a bundled template get a generated placeholder.
    fn install_workflows(
        &self,
        names: &[String],
        renderer: &TemplateRenderer,
    ) -> Result<Vec<PathBuf>> {
        install::install_documents(
            DocumentKind::Workflow,
            names,
            renderer,
            &self.template_variables(),
            |name| self.workflow_path(name),
        )
    }

    /// Install subagent definitions by name.
    ///
    /// Names without a bundled template get a generated placeholder.
    fn install_subagents(
        &self,
        names: &[String],
        renderer: &TemplateRenderer,
    ) -> Result<Vec<PathBuf>> {
        install::install_documents(
            DocumentKind::Subagent,
            names,
            renderer,
            &self.template_variables(),
            |name| self.subagent_path(name),
        )
    }

    /// Shallow-merge `updates` into the settings document and return its path.
    fn configure_settings(&self, updates: Vars) -> Result<PathBuf> {
        let path = self.settings_path();
        settings::merge_into(&path, updates)?;
        Ok(path)
    }

    /// Merge MCP server definitions into the MCP document and return its path.
    fn configure_mcp_servers(&self, servers: Vars) -> Result<PathBuf> {
        let path = self.mcp_config_path();
        settings::merge_mcp_servers(&path, servers)?;
        Ok(path)
    }

    /// Install the tool's safety extras for the named guards.
    fn install_guards(
        &self,
        names: &[String],
        renderer: &TemplateRenderer,
    ) -> Result<Vec<PathBuf>>;

    /// Files `install_guards` would write for these guards.
    fn guard_paths(&self, names: &[String]) -> Vec<PathBuf>;

    /// Whether the target looks usable: it must exist and be a directory.
    fn validate_environment(&self) -> bool {
        self.target_path().is_dir()
    }
}

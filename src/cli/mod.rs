//! CLI argument parsing for bob.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bob: scaffold coding-agent rules, settings, workflows, and guard hooks.
///
/// Generates the on-disk configuration a coding agent (Claude Code, Cursor)
/// reads from a repository, following each tool's layout conventions.
#[derive(Parser, Debug)]
#[command(name = "bob")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for bob.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show version, supported agents, and available presets.
    Version,

    /// Show environment diagnostics for a target repository.
    ///
    /// Reports the git repository, common project files, and which agent
    /// files (rules, settings, MCP) are present.
    Status(TargetArgs),

    /// Render the rules document and write it where the agent reads it.
    GenerateRules(GenerateRulesArgs),

    /// Apply a settings preset to the agent's settings file.
    ApplyDefaults(ApplyDefaultsArgs),

    /// Install workflow commands and subagent definitions.
    ///
    /// Names without a bundled template get a generated placeholder.
    InstallWorkflows(InstallWorkflowsArgs),

    /// Add or replace MCP server definitions.
    ConfigureMcp(ConfigureMcpArgs),

    /// Install safety guards.
    ///
    /// Claude Code gets PreToolUse hook scripts; Cursor gets an AI-safety
    /// rule and a denied-commands setting.
    InstallHooks(InstallHooksArgs),

    /// Diagnose scaffolding health.
    ///
    /// Reports missing rules, malformed settings, broken frontmatter,
    /// leftover template syntax, and non-executable hook scripts.
    Doctor(DoctorArgs),

    /// Scaffold everything: rules, preset, workflows, subagents, and guards.
    Init(InitArgs),
}

/// Options shared by every command that acts on a target repository.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Coding agent to scaffold for (default from .bob/config.yaml, else claude-code).
    #[arg(long, value_name = "AGENT")]
    pub agent_type: Option<String>,

    /// Repository to scaffold.
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub target_path: PathBuf,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Directory of template overrides.
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,
}

/// Arguments for the `generate-rules` command.
#[derive(Args, Debug)]
pub struct GenerateRulesArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Template variable override (repeatable).
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

/// Arguments for the `apply-defaults` command.
#[derive(Args, Debug)]
pub struct ApplyDefaultsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Preset to apply (default from .bob/config.yaml, else development-team).
    #[arg(long)]
    pub preset: Option<String>,

    /// List available presets and exit.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `install-workflows` command.
#[derive(Args, Debug)]
pub struct InstallWorkflowsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Workflow to install (repeatable or comma-separated).
    #[arg(long = "workflow", value_delimiter = ',', value_name = "NAME")]
    pub workflows: Vec<String>,

    /// Subagent to install (repeatable or comma-separated).
    #[arg(long = "subagent", value_delimiter = ',', value_name = "NAME")]
    pub subagents: Vec<String>,

    /// Only install names matching this glob.
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// List available workflows and subagents and exit.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `configure-mcp` command.
#[derive(Args, Debug)]
pub struct ConfigureMcpArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Server name.
    #[arg(long, requires = "command", conflicts_with = "json")]
    pub server: Option<String>,

    /// Command that starts the server.
    #[arg(long, requires = "server")]
    pub command: Option<String>,

    /// Argument passed to the server command (repeatable).
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true, requires = "server")]
    pub args: Vec<String>,

    /// Environment variable for the server (repeatable).
    #[arg(long = "env", value_name = "KEY=VALUE", requires = "server")]
    pub env: Vec<String>,

    /// Server definitions as a JSON object keyed by server name.
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

/// Arguments for the `install-hooks` command.
#[derive(Args, Debug)]
pub struct InstallHooksArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Guard to install (repeatable; default from .bob/config.yaml).
    #[arg(long = "guard", value_delimiter = ',', value_name = "NAME")]
    pub guards: Vec<String>,

    /// List available guards and exit.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `doctor` command.
#[derive(Args, Debug)]
pub struct DoctorArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Attempt to repair detected issues.
    #[arg(long)]
    pub repair: bool,

    /// Force repairs without confirmation (use with --repair).
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Preset to apply (default from .bob/config.yaml).
    #[arg(long)]
    pub preset: Option<String>,

    /// Skip guard installation.
    #[arg(long)]
    pub no_guards: bool,

    /// Write a .bob/config.yaml recording the choices made.
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

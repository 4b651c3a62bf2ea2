//! Command implementations for bob.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command that touches a repository resolves a
//! [`ScaffoldContext`](crate::context::ScaffoldContext) first and honors
//! `--dry-run` by printing what it would write.

mod defaults;
mod doctor;
mod generate;
mod hooks;
pub(crate) mod init;
mod mcp;
mod status;
mod table;
mod version;
mod workflows;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Version => version::cmd_version(),
        Command::Status(args) => status::cmd_status(args),
        Command::GenerateRules(args) => generate::cmd_generate_rules(args),
        Command::ApplyDefaults(args) => defaults::cmd_apply_defaults(args),
        Command::InstallWorkflows(args) => workflows::cmd_install_workflows(args),
        Command::ConfigureMcp(args) => mcp::cmd_configure_mcp(args),
        Command::InstallHooks(args) => hooks::cmd_install_hooks(args),
        Command::Doctor(args) => doctor::cmd_doctor(args),
        Command::Init(args) => init::cmd_init(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TargetArgs;
    use crate::exit_codes;
    use std::path::PathBuf;

    #[test]
    fn dispatch_version_succeeds() {
        assert!(dispatch(Command::Version).is_ok());
    }

    #[test]
    fn dispatch_routes_status_to_target_resolution() {
        let result = dispatch(Command::Status(TargetArgs {
            agent_type: None,
            target_path: PathBuf::from("/definitely/not/a/real/path"),
            dry_run: false,
            templates_dir: None,
        }));
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("Target path does not exist"));
    }
}

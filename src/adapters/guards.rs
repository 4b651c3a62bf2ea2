//! Catalogue of bundled safety guards.
//!
//! A guard is a named set of command patterns the agent must not run. Tools
//! with hook support get the guard's script; tools without it get the
//! patterns written into a rule file and a denied-commands setting.

use crate::error::{BobError, Result};
use crate::templates::builtin::GUARDS_PREFIX;

/// A bundled guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub name: &'static str,
    pub description: &'static str,
    /// Substrings the guard script blocks. Kept in step with the script.
    pub denied_commands: &'static [&'static str],
}

impl Guard {
    /// Template name of the guard's hook script.
    pub fn script_template(&self) -> String {
        format!("{}/{}.sh", GUARDS_PREFIX, self.name)
    }

    /// File name the script is installed under.
    pub fn script_file_name(&self) -> String {
        format!("{}.sh", self.name)
    }
}

pub const GUARDS: &[Guard] = &[
    Guard {
        name: "block-dangerous-commands",
        description: "Blocks destructive shell commands (recursive deletes, force pushes, disk writes)",
        denied_commands: &[
            "rm -rf /",
            "rm -rf ~",
            "sudo ",
            "chmod -R 777",
            "git push --force",
            "git push -f",
            "mkfs",
            "dd if=",
            "> /dev/sd",
        ],
    },
    Guard {
        name: "protect-secrets",
        description: "Blocks shell commands that touch credential and key files",
        denied_commands: &[".env", "secrets.yml", ".pem", ".key", "id_rsa", ".aws/credentials"],
    },
];

/// Names of every bundled guard, in catalogue order.
pub fn guard_names() -> Vec<&'static str> {
    GUARDS.iter().map(|g| g.name).collect()
}

pub fn find_guard(name: &str) -> Option<&'static Guard> {
    GUARDS.iter().find(|g| g.name == name)
}

/// Resolve guard names, failing on the first unknown one.
///
/// An empty list selects every guard. Duplicates are dropped.
pub fn resolve_guards(names: &[String]) -> Result<Vec<&'static Guard>> {
    if names.is_empty() {
        return Ok(GUARDS.iter().collect());
    }

    let mut resolved: Vec<&'static Guard> = Vec::with_capacity(names.len());
    for name in names {
        let guard = find_guard(name).ok_or_else(|| {
            BobError::UserError(format!(
                "unknown guard '{}'. Available: {}",
                name,
                guard_names().join(", ")
            ))
        })?;
        if !resolved.iter().any(|g| g.name == guard.name) {
            resolved.push(guard);
        }
    }
    Ok(resolved)
}

/// Every denied command across `guards`, first occurrence order, no duplicates.
pub fn denied_commands(guards: &[&Guard]) -> Vec<String> {
    let mut commands: Vec<String> = Vec::new();
    for command in guards.iter().flat_map(|g| g.denied_commands.iter()) {
        if !commands.iter().any(|c| c == command) {
            commands.push(command.to_string());
        }
    }
    commands
}

//! Static adapter registry.

use super::{Adapter, ClaudeAdapter, CursorAdapter, claude, cursor};
use crate::error::{BobError, Result};
use crate::templates::Vars;
use std::path::PathBuf;
use tracing::debug;

type Constructor = fn(PathBuf, Vars) -> Box<dyn Adapter>;

struct Registration {
    name: &'static str,
    construct: Constructor,
}

/// Registered adapters, in the order they are reported to users.
static REGISTRY: &[Registration] = &[
    Registration {
        name: claude::AGENT_NAME,
        construct: ClaudeAdapter::boxed,
    },
    Registration {
        name: cursor::AGENT_NAME,
        construct: CursorAdapter::boxed,
    },
];

/// Identifiers of every registered adapter.
pub fn supported_agents() -> Vec<&'static str> {
    REGISTRY.iter().map(|r| r.name).collect()
}

/// Build the adapter registered under `agent_type`.
pub fn create_adapter(
    agent_type: &str,
    target: impl Into<PathBuf>,
    settings: Option<Vars>,
) -> Result<Box<dyn Adapter>> {
    let registration = REGISTRY
        .iter()
        .find(|r| r.name == agent_type)
        .ok_or_else(|| BobError::UnsupportedAgent {
            requested: agent_type.to_string(),
            supported: supported_agents().into_iter().map(String::from).collect(),
        })?;

    let target = target.into();
    debug!(agent = agent_type, target = %target.display(), "creating adapter");
    Ok((registration.construct)(target, settings.unwrap_or_default()))
}

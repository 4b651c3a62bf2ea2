//! Templates bundled into the binary.
//!
//! Names are paths relative to the `templates/` directory at the crate root.
//! A templates directory passed at runtime can override any of these by
//! providing a file with the same relative name.

/// Tool configuration documents, one per registered agent type.
pub const CONFIG_PREFIX: &str = "config";
/// The rules document rendered by `generate-rules`.
pub const RULES_TEMPLATE: &str = "rules/configure_rules.md";
/// The safety rule written for tools without hook support.
pub const SAFETY_RULE_TEMPLATE: &str = "rules/ai-safety.mdc";
/// Workflow command documents.
pub const WORKFLOWS_PREFIX: &str = "workflows";
/// Subagent definition documents.
pub const SUBAGENTS_PREFIX: &str = "subagents";
/// Guard hook scripts. Copied verbatim, never rendered.
pub const GUARDS_PREFIX: &str = "guards";

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),*]
    };
}

/// Every bundled template as `(relative name, source)`.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = bundled![
    "config/claude-code.yaml",
    "config/cursor.yaml",
    "rules/configure_rules.md",
    "rules/ai-safety.mdc",
    "workflows/code-review.md",
    "workflows/create-pr.md",
    "workflows/fix-issue.md",
    "workflows/write-tests.md",
    "subagents/code-reviewer.md",
    "subagents/test-runner.md",
    "subagents/security-auditor.md",
    "guards/block-dangerous-commands.sh",
    "guards/protect-secrets.sh",
];

/// Stems of the bundled templates directly under `category`, sorted.
pub fn names_under(category: &str) -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_TEMPLATES
        .iter()
        .filter_map(|(name, _)| name.strip_prefix(category)?.strip_prefix('/'))
        .filter_map(|rest| rest.rsplit_once('.').map(|(stem, _)| stem.to_string()))
        .collect();
    names.sort();
    names
}

/// Whether a template is rendered through the engine or copied as-is.
pub fn is_static(name: &str) -> bool {
    [GUARDS_PREFIX, CONFIG_PREFIX]
        .iter()
        .any(|prefix| name.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}

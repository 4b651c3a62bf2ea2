//! Tests for adapter dispatch and the per-tool conventions.

use super::*;
use crate::templates::context::vars;
use crate::templates::{TemplateRenderer, Vars};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn renderer() -> TemplateRenderer {
    TemplateRenderer::builtin().unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_supported_agents_in_registration_order() {
    assert_eq!(supported_agents(), vec!["claude-code", "cursor"]);
}

#[test]
fn test_every_registered_agent_dispatches_to_matching_adapter() {
    let temp_dir = TempDir::new().unwrap();

    for agent in supported_agents() {
        let adapter = create_adapter(agent, temp_dir.path(), None).unwrap();
        assert_eq!(adapter.agent_name(), agent);
        assert_eq!(adapter.target_path(), temp_dir.path());
    }
}

#[test]
fn test_output_formats() {
    let temp_dir = TempDir::new().unwrap();

    let claude = create_adapter("claude-code", temp_dir.path(), None).unwrap();
    let cursor = create_adapter("cursor", temp_dir.path(), None).unwrap();

    assert_eq!(claude.output_format(), OutputFormat::SingleFile);
    assert_eq!(cursor.output_format(), OutputFormat::MultipleFiles);
    assert_eq!(claude.output_format().to_string(), "single_file");
    assert_eq!(cursor.output_format().to_string(), "multiple_files");
}

#[test]
fn test_unsupported_agent_lists_exactly_registered() {
    let temp_dir = TempDir::new().unwrap();

    let err = create_adapter("unknown-agent", temp_dir.path(), None)
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        "Unsupported agent type: unknown-agent. Supported: claude-code, cursor"
    );
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

// ============================================================================
// Claude Code
// ============================================================================

#[test]
fn test_claude_output_paths() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    assert_eq!(adapter.output_paths(), vec![temp_dir.path().join("CLAUDE.md")]);
    assert_eq!(adapter.rules_path(), temp_dir.path().join("CLAUDE.md"));
}

#[test]
fn test_claude_template_variables_include_settings() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter(
        "claude-code",
        temp_dir.path(),
        Some(vars([("test_key", "test_value")])),
    )
    .unwrap();

    let variables = adapter.template_variables();
    assert_eq!(variables["agent_type"], json!("claude-code"));
    assert_eq!(variables["output_file"], json!("CLAUDE.md"));
    assert_eq!(variables["test_key"], json!("test_value"));
}

#[test]
fn test_claude_write_rules() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    adapter.write_rules("# Test Rules\nThis is a test.").unwrap();

    let written = fs::read_to_string(temp_dir.path().join("CLAUDE.md")).unwrap();
    assert_eq!(written, "# Test Rules\nThis is a test.");
}

#[test]
fn test_write_rules_twice_keeps_only_second() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    adapter.write_rules("first version with more text").unwrap();
    adapter.write_rules("second").unwrap();

    let written = fs::read_to_string(adapter.rules_path()).unwrap();
    assert_eq!(written, "second");
}

#[test]
fn test_claude_install_known_workflows() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let written = adapter
        .install_workflows(&names(&["code-review", "fix-issue"]), &renderer())
        .unwrap();

    assert_eq!(
        written,
        vec![
            temp_dir.path().join(".claude/commands/code-review.md"),
            temp_dir.path().join(".claude/commands/fix-issue.md"),
        ]
    );
    let review = fs::read_to_string(&written[0]).unwrap();
    assert!(review.contains("CLAUDE.md"));
    assert!(!review.contains("{{"));
}

#[test]
fn test_unknown_workflow_yields_exactly_one_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let written = adapter
        .install_workflows(&names(&["deploy-staging"]), &renderer())
        .unwrap();

    assert_eq!(written.len(), 1);
    let commands_dir = temp_dir.path().join(".claude/commands");
    assert_eq!(fs::read_dir(&commands_dir).unwrap().count(), 1);
    let content = fs::read_to_string(commands_dir.join("deploy-staging.md")).unwrap();
    assert!(content.contains("deploy-staging"));
}

#[test]
fn test_invalid_workflow_name_is_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let result = adapter.install_workflows(&names(&["../escape"]), &renderer());

    assert!(result.is_err());
    assert!(!temp_dir.path().join(".claude").exists());
}

#[test]
fn test_claude_install_subagents() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let written = adapter
        .install_subagents(&names(&["code-reviewer", "made-up-agent"]), &renderer())
        .unwrap();

    assert_eq!(written[0], temp_dir.path().join(".claude/agents/code-reviewer.md"));
    assert_eq!(written[1], temp_dir.path().join(".claude/agents/made-up-agent.md"));
    assert!(written.iter().all(|p| p.is_file()));
}

#[test]
fn test_claude_install_guards_registers_hooks_once() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();
    let guards = names(&["block-dangerous-commands"]);

    adapter.install_guards(&guards, &renderer()).unwrap();
    let written = adapter.install_guards(&guards, &renderer()).unwrap();

    let script = temp_dir.path().join(".claude/hooks/block-dangerous-commands.sh");
    assert_eq!(written, vec![script.clone(), adapter.settings_path()]);
    assert!(crate::fs::is_executable(&script));
    assert!(fs::read_to_string(&script).unwrap().starts_with("#!/usr/bin/env bash"));

    let settings = settings::read_object(&adapter.settings_path()).unwrap();
    assert_eq!(settings::registered_hook_commands(&settings, "PreToolUse").len(), 1);
    assert_eq!(settings["hooks"]["PreToolUse"][0]["matcher"], json!("Bash"));
}

#[test]
fn test_install_guards_keeps_existing_settings() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();
    adapter
        .configure_settings(vars([("model", "sonnet")]))
        .unwrap();

    adapter.install_guards(&[], &renderer()).unwrap();

    let settings = settings::read_object(&adapter.settings_path()).unwrap();
    assert_eq!(settings["model"], json!("sonnet"));
    assert_eq!(settings::registered_hook_commands(&settings, "PreToolUse").len(), 2);
}

#[test]
fn test_unknown_guard_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let err = adapter
        .install_guards(&names(&["no-such-guard"]), &renderer())
        .unwrap_err();

    assert!(err.to_string().contains("unknown guard 'no-such-guard'"));
    assert!(!temp_dir.path().join(".claude").exists());
}

#[test]
fn test_claude_mcp_path() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();

    let path = adapter
        .configure_mcp_servers(vars([("github", json!({"command": "gh-mcp"}))]))
        .unwrap();

    assert_eq!(path, temp_dir.path().join(".mcp.json"));
    let doc = settings::read_object(&path).unwrap();
    assert_eq!(doc["mcpServers"]["github"]["command"], json!("gh-mcp"));
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn test_cursor_output_paths() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("cursor", temp_dir.path(), None).unwrap();

    let paths = adapter.output_paths();

    assert_eq!(paths.len(), 4);
    assert!(
        paths
            .iter()
            .any(|p| p.to_string_lossy().contains("development-workflow.mdc"))
    );
}

#[test]
fn test_cursor_write_rules_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("cursor", temp_dir.path(), None).unwrap();

    adapter.write_rules("# Test Rules\nThis is a test.").unwrap();

    let rules_dir = temp_dir.path().join(".cursor").join("rules");
    assert!(rules_dir.is_dir());
    assert!(rules_dir.join("coding-agent-rules.mdc").is_file());
}

#[test]
fn test_cursor_document_locations() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("cursor", temp_dir.path(), None).unwrap();

    assert_eq!(
        adapter.workflow_path("code-review"),
        temp_dir.path().join(".cursor/commands/code-review.md")
    );
    assert_eq!(
        adapter.subagent_path("test-runner"),
        temp_dir.path().join(".cursor/agents/test-runner.mdc")
    );
    assert_eq!(adapter.settings_path(), temp_dir.path().join(".cursor/settings.json"));
    assert_eq!(adapter.mcp_config_path(), temp_dir.path().join(".cursor/mcp.json"));
}

#[test]
fn test_cursor_install_guards_writes_rule_and_denied_commands() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("cursor", temp_dir.path(), None).unwrap();

    let written = adapter
        .install_guards(&names(&["block-dangerous-commands"]), &renderer())
        .unwrap();

    let rule = temp_dir.path().join(".cursor/rules/ai-safety.mdc");
    assert_eq!(written, vec![rule.clone(), adapter.settings_path()]);
    let content = fs::read_to_string(&rule).unwrap();
    assert!(content.contains("- `git push --force`"));
    assert!(content.contains("alwaysApply: true"));

    let settings = settings::read_object(&adapter.settings_path()).unwrap();
    let denied = settings["agent.deniedCommands"].as_array().unwrap();
    assert!(denied.contains(&json!("mkfs")));
    assert!(!settings.contains_key("agent"));
}

// ============================================================================
// Shared behavior
// ============================================================================

#[test]
fn test_configure_settings_merges_shallowly() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("cursor", temp_dir.path(), None).unwrap();

    adapter.configure_settings(vars([("x", 1)])).unwrap();
    let path = adapter.configure_settings(vars([("y", 2)])).unwrap();

    let settings = settings::read_object(&path).unwrap();
    assert_eq!(settings["x"], json!(1));
    assert_eq!(settings["y"], json!(2));
}

#[test]
fn test_configure_settings_rejects_non_object_document() {
    let temp_dir = TempDir::new().unwrap();
    let adapter = create_adapter("claude-code", temp_dir.path(), None).unwrap();
    fs::create_dir_all(temp_dir.path().join(".claude")).unwrap();
    fs::write(adapter.settings_path(), "\"just a string\"").unwrap();

    assert!(adapter.configure_settings(Vars::new()).is_err());
    assert_eq!(
        fs::read_to_string(adapter.settings_path()).unwrap(),
        "\"just a string\""
    );
}

#[test]
fn test_validate_environment() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("not-a-dir");
    fs::write(&file, "").unwrap();

    let ok = create_adapter("claude-code", temp_dir.path(), None).unwrap();
    let missing = create_adapter("claude-code", temp_dir.path().join("missing"), None).unwrap();
    let not_dir = create_adapter("cursor", &file, None).unwrap();

    assert!(ok.validate_environment());
    assert!(!missing.validate_environment());
    assert!(!not_dir.validate_environment());
}

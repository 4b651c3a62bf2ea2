//! Tests for config functionality.

use crate::config::Config;
use crate::templates::context::vars;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.agent_type, "claude-code");
    assert_eq!(config.preset, "development-team");
    assert_eq!(
        config.workflows,
        vec!["code-review", "create-pr", "fix-issue", "write-tests"]
    );
    assert_eq!(
        config.subagents,
        vec!["code-reviewer", "security-auditor", "test-runner"]
    );
    assert_eq!(
        config.guards,
        vec!["block-dangerous-commands", "protect-secrets"]
    );
    assert!(config.templates_dir.is_none());
    assert!(config.variables.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
agent_type: cursor
workflows:
  - code-review
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.agent_type, "cursor");
    assert_eq!(config.workflows, vec!["code-review"]);

    // Unspecified values should use defaults
    assert_eq!(config.preset, "development-team");
    assert_eq!(config.guards.len(), 2);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
agent_type: claude-code
preset: enterprise-security
workflows: [fix-issue, release-notes]
subagents: []
guards: [protect-secrets]
templates_dir: .bob/templates
variables:
  project_name: acme
  strict: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.preset, "enterprise-security");
    assert_eq!(config.workflows, vec!["fix-issue", "release-notes"]);
    assert!(config.subagents.is_empty());
    assert_eq!(config.guards, vec!["protect-secrets"]);
    assert_eq!(config.templates_dir.as_deref(), Some(".bob/templates"));
    assert_eq!(
        config.variables,
        vars([("project_name", json!("acme")), ("strict", json!(true))])
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
agent_type: cursor
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.agent_type, "cursor");
}

#[test]
fn test_validation_rejects_unsupported_agent() {
    let err = Config::from_yaml("agent_type: vim\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unsupported agent_type 'vim'"));
    assert!(msg.contains("claude-code, cursor"));
}

#[test]
fn test_validation_rejects_unknown_preset() {
    let err = Config::from_yaml("preset: yolo\n").unwrap_err();
    assert!(err.to_string().contains("Preset 'yolo' not found"));
}

#[test]
fn test_validation_rejects_empty_names() {
    assert!(Config::from_yaml("workflows: ['']\n").is_err());
    assert!(Config::from_yaml("subagents: ['../x']\n").is_err());
    assert!(Config::from_yaml("guards: ['']\n").is_err());
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("workflows: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_roundtrip() {
    let mut config = Config::default();
    config.templates_dir = Some("custom".to_string());
    config.variables = vars([("team", "platform")]);

    let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_load_for_target_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_for_target(temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_for_target_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = Config::path_for(temp_dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "agent_type: cursor\n").unwrap();

    let config = Config::load_for_target(temp_dir.path()).unwrap();

    assert_eq!(config.agent_type, "cursor");
    assert_eq!(path, temp_dir.path().join(".bob/config.yaml"));
}

#[test]
fn test_templates_dir_resolution() {
    let target = Path::new("/repo");
    let mut config = Config::default();
    assert_eq!(config.templates_dir_for(target), None);

    config.templates_dir = Some("tpl".to_string());
    assert_eq!(config.templates_dir_for(target), Some(PathBuf::from("/repo/tpl")));

    config.templates_dir = Some("/opt/tpl".to_string());
    assert_eq!(config.templates_dir_for(target), Some(PathBuf::from("/opt/tpl")));
}

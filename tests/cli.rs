#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bob(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bob").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// bob version
// ---------------------------------------------------------------------------

#[test]
fn version_lists_agents_and_presets() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-code, cursor"))
        .stdout(predicate::str::contains("development-team"));
}

// ---------------------------------------------------------------------------
// bob generate-rules
// ---------------------------------------------------------------------------

#[test]
fn generate_rules_for_claude_writes_only_claude_md() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["generate-rules", "--agent-type", "claude-code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules generated successfully!"));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(!content.contains("{{"));
}

#[test]
fn generate_rules_for_cursor_writes_combined_rules() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["generate-rules", "--agent-type", "cursor"])
        .assert()
        .success();

    let rules = dir.path().join(".cursor/rules/coding-agent-rules.mdc");
    let content = std::fs::read_to_string(rules).unwrap();
    assert!(content.starts_with("---\n"));
}

#[test]
fn generate_rules_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["generate-rules", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated Rules Preview:"))
        .stdout(predicate::str::contains("Would write:"));

    assert!(!dir.path().join("CLAUDE.md").exists());
}

#[test]
fn generate_rules_with_var_override() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["generate-rules", "--var", "project_name=Acme Rockets"])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(content.contains("Acme Rockets"));
}

#[test]
fn unknown_agent_exits_with_user_error() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["generate-rules", "--agent-type", "unknown-agent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Unsupported agent type: unknown-agent. Supported: claude-code, cursor",
        ));
}

#[test]
fn missing_target_exits_with_user_error() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["status", "--target-path", "does-not-exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Target path does not exist"));
}

// ---------------------------------------------------------------------------
// bob install-workflows / configure-mcp / install-hooks
// ---------------------------------------------------------------------------

#[test]
fn install_workflows_generates_placeholder_for_unknown_name() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["install-workflows", "--workflow", "deploy-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed 1 file(s):"));

    let content =
        std::fs::read_to_string(dir.path().join(".claude/commands/deploy-preview.md")).unwrap();
    assert!(content.contains("# deploy-preview"));
}

#[test]
fn configure_mcp_writes_server_definition() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args([
            "configure-mcp",
            "--server",
            "filesystem",
            "--command",
            "npx",
            "--arg",
            "-y",
            "--env",
            "DEBUG=1",
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join(".mcp.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["mcpServers"]["filesystem"]["command"], "npx");
    assert_eq!(json["mcpServers"]["filesystem"]["args"][0], "-y");
    assert_eq!(json["mcpServers"]["filesystem"]["env"]["DEBUG"], "1");
}

#[test]
fn install_hooks_registers_scripts() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .args(["install-hooks", "--guard", "protect-secrets"])
        .assert()
        .success();

    assert!(dir.path().join(".claude/hooks/protect-secrets.sh").is_file());
    assert!(!dir.path().join(".claude/hooks/block-dangerous-commands.sh").exists());
    let settings = std::fs::read_to_string(dir.path().join(".claude/settings.json")).unwrap();
    assert!(settings.contains("PreToolUse"));
}

// ---------------------------------------------------------------------------
// bob init / doctor
// ---------------------------------------------------------------------------

#[test]
fn doctor_on_empty_directory_reports_issues() {
    let dir = TempDir::new().unwrap();
    bob(&dir)
        .arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("missing_rules"));
}

#[test]
fn init_then_doctor_is_healthy() {
    let dir = TempDir::new().unwrap();
    bob(&dir).args(["init", "--save-config"]).assert().success();

    assert!(dir.path().join(".bob/config.yaml").is_file());

    bob(&dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffolding is healthy"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    bob(&dir).args(["init", "--agent-type", "cursor"]).assert().success();
    bob(&dir).args(["init", "--agent-type", "cursor"]).assert().success();
}

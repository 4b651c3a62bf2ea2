//! Named configuration presets.
//!
//! A preset is a settings dictionary per tool, merged into the tool's
//! settings document by `apply-defaults`.

use crate::adapters::supported_agents;
use crate::error::{BobError, Result};
use crate::templates::Vars;
use serde_json::{Value, json};

pub const DEFAULT_PRESET: &str = "development-team";

/// A named settings preset.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub best_for: &'static str,
    claude_code: fn() -> Value,
    cursor: fn() -> Value,
}

impl Preset {
    /// Settings dictionary for one tool.
    pub fn settings_for(&self, agent_type: &str) -> Result<Vars> {
        let settings = match agent_type {
            "claude-code" => (self.claude_code)(),
            "cursor" => (self.cursor)(),
            other => {
                return Err(BobError::UnsupportedAgent {
                    requested: other.to_string(),
                    supported: supported_agents().into_iter().map(String::from).collect(),
                });
            }
        };

        match settings {
            Value::Object(map) => Ok(map),
            _ => Ok(Vars::new()),
        }
    }

    /// Human-readable title, e.g. `Development Team`.
    pub fn title(&self) -> String {
        self.name
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Preview text for one tool.
    ///
    /// Pretty JSON for Claude Code; a `.cursorrules` summary for Cursor.
    pub fn render_document(&self, agent_type: &str) -> Result<String> {
        let settings = self.settings_for(agent_type)?;
        let json = to_pretty(&settings)?;

        if agent_type != "cursor" {
            return Ok(json);
        }

        let text = |key: &str, default: &str| {
            settings
                .get(key)
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| default.to_string())
        };

        let rules = settings
            .get("rules")
            .and_then(Value::as_object)
            .map(|rules| {
                rules
                    .iter()
                    .map(|(rule, status)| {
                        format!("- {}: {}", rule, status.as_str().unwrap_or_default())
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        Ok(format!(
            "# Cursor Configuration - {title}\n\
             # Generated by bob\n\
             \n\
             # {description}\n\
             # Best for: {best_for}\n\
             \n\
             ## Core Settings\n\
             {json}\n\
             \n\
             ## Usage Guidelines\n\
             This configuration is optimized for {best_for_lower}.\n\
             \n\
             ## Key Features:\n\
             - Default Model: {model}\n\
             - Mode: {mode}\n\
             - Auto Confirm: {confirm}\n\
             - Max Iterations: {iterations}\n\
             \n\
             ## Rules\n\
             {rules}\n",
            title = self.title(),
            description = self.description,
            best_for = self.best_for,
            best_for_lower = self.best_for.to_lowercase(),
            json = json,
            model = text("chat.defaultModel", "claude-3-5-sonnet"),
            mode = text("chat.mode", "plan-first"),
            confirm = text("agent.alwaysConfirm", "true"),
            iterations = text("agent.maxIterations", "10"),
            rules = rules,
        ))
    }
}

fn to_pretty(settings: &Vars) -> Result<String> {
    serde_json::to_string_pretty(settings)
        .map_err(|e| BobError::UserError(format!("failed to serialize preset: {}", e)))
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "development-team",
        description: "Optimized for 2-5 developers with established CI/CD and code review process",
        best_for: "Team collaboration, code quality focus, established development practices",
        claude_code: development_team_claude,
        cursor: development_team_cursor,
    },
    Preset {
        name: "solo-developer",
        description: "Streamlined for individual developers doing rapid prototyping and personal projects",
        best_for: "Speed and efficiency, personal projects, rapid iteration, minimal overhead",
        claude_code: solo_developer_claude,
        cursor: solo_developer_cursor,
    },
    Preset {
        name: "enterprise-security",
        description: "High-security configuration for large teams in regulated environments",
        best_for: "Regulated environments, large teams, production systems, compliance requirements",
        claude_code: enterprise_security_claude,
        cursor: enterprise_security_cursor,
    },
];

pub fn list_presets() -> &'static [Preset] {
    PRESETS
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Result<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name).ok_or_else(|| {
        BobError::UserError(format!(
            "Preset '{}' not found. Available: {}",
            name,
            preset_names().join(", ")
        ))
    })
}

fn development_team_claude() -> Value {
    json!({
        "defaultMode": "plan",
        "autoApprove": false,
        "confirmBeforeToolUse": true,
        "tools": {
            "thinking": true,
            "allowedTools": ["Read", "Write", "Edit", "MultiEdit", "Bash", "Task", "CreateDiagram"],
            "bashTimeout": 90,
            "maxFileSize": "1MB"
        },
        "permissions": {
            "allowedCommands": [
                "git status", "git diff", "git add .", "git commit -m",
                "pytest", "npm test", "npm run lint", "npm run build",
                "ruff check", "ruff format", "mypy", "black",
                "ls", "find", "grep", "cat", "head", "tail"
            ],
            "restrictedPaths": [".env*", "secrets.yml", "*.key", "*.pem"],
            "requireApprovalFor": ["git push", "npm publish", "pip install"]
        },
        "collaboration": {
            "autoCommit": false,
            "requireCommitMessage": true,
            "commitMessageTemplate": "[{type}] {description}",
            "notifyOnLargeChanges": 50,
            "branchProtection": true
        },
        "quality": {
            "runTestsAfterChanges": true,
            "formatCodeOnSave": true,
            "requireLintingPass": true,
            "autoFixLintIssues": true
        }
    })
}

fn development_team_cursor() -> Value {
    json!({
        "chat.defaultModel": "claude-3-5-sonnet",
        "chat.mode": "plan-first",
        "agent.alwaysConfirm": true,
        "agent.maxIterations": 10,
        "files.autoSave": "afterDelay",
        "editor.formatOnSave": true,
        "rules": {
            "development-workflow": "enabled",
            "code-standards": "enabled",
            "project-structure": "enabled",
            "logging-patterns": "enabled",
            "team-collaboration": "enabled"
        }
    })
}

fn solo_developer_claude() -> Value {
    json!({
        "defaultMode": "code",
        "autoApprove": false,
        "confirmBeforeToolUse": false,
        "tools": {
            "thinking": false,
            "allowedTools": ["Read", "Write", "Edit", "MultiEdit", "Bash"],
            "bashTimeout": 45,
            "parallelOperations": true
        },
        "permissions": {
            "allowedCommands": [
                "git status", "git add .", "git commit -m", "git push",
                "pytest -x", "npm test", "npm start", "npm run dev",
                "python -m", "pip install", "npm install",
                "ruff check --fix", "black .", "isort .",
                "ls", "find", "grep", "cat", "mkdir", "mv", "cp"
            ],
            "autoApprovePatterns": ["git add", "git commit", "format*", "lint*"],
            "restrictedCommands": ["rm -rf", "sudo", "curl", "wget"]
        },
        "workflow": {
            "fastCommits": true,
            "autoCommitOnSuccess": false,
            "smartFormatting": true,
            "quickTests": "pytest --maxfail=1 -x",
            "autoInstallDependencies": true
        },
        "optimization": {
            "cacheResults": true,
            "skipUnnecessaryChecks": true,
            "batchOperations": true
        }
    })
}

fn solo_developer_cursor() -> Value {
    json!({
        "chat.defaultModel": "claude-3-5-sonnet",
        "chat.mode": "code-first",
        "agent.alwaysConfirm": false,
        "agent.maxIterations": 15,
        "files.autoSave": "onFocusChange",
        "editor.formatOnSave": true,
        "rules": {
            "development-workflow": "streamlined",
            "code-standards": "relaxed",
            "quick-iteration": "enabled"
        }
    })
}

fn enterprise_security_claude() -> Value {
    json!({
        "defaultMode": "plan",
        "autoApprove": false,
        "confirmBeforeToolUse": true,
        "requireExplicitApproval": true,
        "tools": {
            "thinking": true,
            "allowedTools": ["Read", "Edit", "Task", "CreateDiagram"],
            "restrictedBash": true,
            "bashTimeout": 30,
            "logAllOperations": true
        },
        "permissions": {
            "allowedCommands": [
                "git status", "git diff --name-only", "pytest --collect-only",
                "npm audit", "ls", "find . -name", "grep -n", "head", "tail"
            ],
            "deniedCommands": [
                "git push", "npm publish", "pip install", "npm install",
                "curl", "wget", "chmod", "chown", "sudo", "rm"
            ],
            "requireApprovalFor": "*",
            "auditLog": "~/.agent-audit.log"
        },
        "security": {
            "sandboxMode": true,
            "fileAccessControl": "whitelist",
            "allowedDirectories": ["./src/", "./tests/", "./docs/"],
            "encryptSensitiveData": true,
            "sessionTimeout": 1800
        },
        "validation": {
            "requireTestsForChanges": true,
            "codeReviewRequired": true,
            "securityScanOnWrite": true,
            "complianceChecks": ["pii-scan", "secret-scan", "license-check"]
        },
        "monitoring": {
            "trackAllFileChanges": true,
            "notifyOnSensitiveAccess": true,
            "generateComplianceReports": true
        }
    })
}

fn enterprise_security_cursor() -> Value {
    json!({
        "chat.defaultModel": "claude-3-5-sonnet",
        "chat.mode": "plan-first",
        "agent.alwaysConfirm": true,
        "agent.requireApproval": true,
        "agent.maxIterations": 5,
        "files.autoSave": "never",
        "editor.formatOnSave": false,
        "rules": {
            "security-first": "enabled",
            "compliance": "enabled",
            "audit-logging": "enabled",
            "restricted-access": "enabled"
        }
    })
}

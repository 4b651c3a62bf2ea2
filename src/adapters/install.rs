//! Best-effort installation of named workflow and subagent documents.
//!
//! A name with a bundled (or overridden) template is rendered from it. Any
//! other name gets a minimal generated placeholder so scaffolding never
//! stops on an unknown name.

use crate::error::{BobError, Result};
use crate::fs::atomic_write_file;
use crate::templates::builtin::{SUBAGENTS_PREFIX, WORKFLOWS_PREFIX};
use crate::templates::context::{layered, vars};
use crate::templates::{TemplateRenderer, Vars};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{info, warn};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid name regex"));

const WORKFLOW_PLACEHOLDER: &str = r#"---
description: "{{ name }} workflow"
---

# {{ name }}

Describe what `{{ name }}` should accomplish, the steps to follow, and how to
verify the result. Arguments passed to the command are available as
`$ARGUMENTS`.
"#;

const SUBAGENT_PLACEHOLDER: &str = r#"---
name: "{{ name }}"
description: "{{ name }} subagent"
tools: Read, Grep, Glob
---

You are the `{{ name }}` subagent. Describe this agent's responsibility,
the tools it may use, and what it must report back.
"#;

/// The kinds of named auxiliary documents an adapter installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Workflow,
    Subagent,
}

impl DocumentKind {
    /// Template category holding this kind's documents.
    pub fn category(&self) -> &'static str {
        match self {
            DocumentKind::Workflow => WORKFLOWS_PREFIX,
            DocumentKind::Subagent => SUBAGENTS_PREFIX,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            DocumentKind::Workflow => WORKFLOW_PLACEHOLDER,
            DocumentKind::Subagent => SUBAGENT_PLACEHOLDER,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocumentKind::Workflow => "workflow",
            DocumentKind::Subagent => "subagent",
        }
    }
}

/// A rendered document and whether it came from a placeholder.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub content: String,
    pub placeholder: bool,
}

/// Reject names that cannot be used as a file stem.
pub fn validate_name(kind: DocumentKind, name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(BobError::UserError(format!(
            "invalid {} name '{}': use letters, digits, '.', '_' or '-', starting with a letter or digit",
            kind.label(),
            name
        )))
    }
}

/// Render one named document, falling back to a placeholder.
pub fn render_document(
    kind: DocumentKind,
    name: &str,
    renderer: &TemplateRenderer,
    base_vars: &Vars,
) -> Result<RenderedDocument> {
    validate_name(kind, name)?;

    let context = layered([base_vars.clone(), vars([("name", name)])]);

    match renderer.find(kind.category(), name) {
        Some(template) => Ok(RenderedDocument {
            content: renderer.render(&template, &context)?,
            placeholder: false,
        }),
        None => {
            warn!(kind = kind.label(), name, "no template found, generating placeholder");
            let label = format!("{}/{} (placeholder)", kind.category(), name);
            Ok(RenderedDocument {
                content: renderer.render_str(&label, kind.placeholder(), &context)?,
                placeholder: true,
            })
        }
    }
}

/// Render and write each named document to `path_for(name)`.
pub(super) fn install_documents<F>(
    kind: DocumentKind,
    names: &[String],
    renderer: &TemplateRenderer,
    base_vars: &Vars,
    path_for: F,
) -> Result<Vec<PathBuf>>
where
    F: Fn(&str) -> PathBuf,
{
    let mut written = Vec::with_capacity(names.len());

    for name in names {
        let document = render_document(kind, name, renderer, base_vars)?;
        let path = path_for(name);
        atomic_write_file(&path, &document.content)?;
        info!(kind = kind.label(), name = %name, path = %path.display(), "installed");
        written.push(path);
    }

    Ok(written)
}

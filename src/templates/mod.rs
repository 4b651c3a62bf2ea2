//! Template rendering subsystem.
//!
//! - **Renderer**: Tera-backed rendering of named templates
//! - **Frontmatter**: post-render check that a leading `---` block is valid YAML
//! - **Context**: layered template variables
//! - **Rules**: the rules document pipeline used by `generate-rules`
//!
//! # Two-pass rendering
//!
//! Rendering substitutes `{{ variable }}` placeholders (and Tera control
//! blocks) first, then scans the output. When the first line is exactly
//! `---` and a later line is exactly `---`, the lines in between must parse
//! as YAML. A failure there is a template bug and is reported as
//! [`TemplateError::MalformedMetadata`], separate from caller mistakes.

pub mod builtin;
pub mod context;
pub mod frontmatter;
mod renderer;
mod rules;


pub use context::Vars;
pub use renderer::TemplateRenderer;
pub use rules::{base_variables, generate_rules, load_agent_config, render_configure_rules};

use std::path::PathBuf;
use thiserror::Error;

/// Error type for template failures.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template is registered under the requested name.
    #[error("Template not found: {name}. Available: {}", available.join(", "))]
    NotFound { name: String, available: Vec<String> },

    /// Tera failed to parse or render the template (including undefined variables).
    #[error("failed to render template '{name}': {}", describe(source))]
    Render { name: String, source: tera::Error },

    /// The rendered frontmatter is not valid YAML.
    #[error("Invalid YAML frontmatter after rendering '{name}': {source}")]
    MalformedMetadata {
        name: String,
        source: serde_yaml::Error,
    },

    /// An override directory could not be read.
    #[error("failed to load templates from '{}': {reason}", path.display())]
    Load { path: PathBuf, reason: String },
}

/// Flatten a Tera error and its causes into one line.
///
/// Tera's top-level message only names the template; the useful detail
/// (such as which variable was missing) lives in the source chain.
fn describe(err: &tera::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut cause = std::error::Error::source(err);
    while let Some(inner) = cause {
        parts.push(inner.to_string());
        cause = inner.source();
    }
    parts.join(": ")
}

//! Tera-backed renderer with a post-render frontmatter check.

use super::builtin::{BUILTIN_TEMPLATES, is_static};
use super::context::Vars;
use super::{TemplateError, frontmatter};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::{debug, trace};

/// Renders named templates and checks their frontmatter.
///
/// Holds every known template source: the bundled set, with any files from
/// an override directory layered on top by relative name.
#[derive(Debug)]
pub struct TemplateRenderer {
    sources: BTreeMap<String, String>,
    tera: Tera,
}

impl TemplateRenderer {
    /// A renderer over the bundled templates only.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::with_overrides(None)
    }

    /// A renderer over the bundled templates plus an optional override directory.
    pub fn with_overrides(dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut sources: BTreeMap<String, String> = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, source)| (name.to_string(), source.to_string()))
            .collect();

        if let Some(dir) = dir {
            let overrides = load_dir(dir)?;
            debug!(dir = %dir.display(), count = overrides.len(), "loaded template overrides");
            sources.extend(overrides);
        }

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(
            sources
                .iter()
                .filter(|(name, _)| !is_static(name))
                .map(|(name, source)| (name.as_str(), source.as_str())),
        )
        .map_err(|e| TemplateError::Render {
            name: dir
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "<builtin>".to_string()),
            source: e,
        })?;

        Ok(Self { sources, tera })
    }

    /// Whether a template with this relative name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Raw source of a template, without rendering.
    pub fn source(&self, name: &str) -> Result<&str, TemplateError> {
        self.sources
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| self.not_found(name))
    }

    /// Render a named template and validate its frontmatter.
    pub fn render(&self, name: &str, vars: &Vars) -> Result<String, TemplateError> {
        if !self.contains(name) {
            return Err(self.not_found(name));
        }

        let rendered = if is_static(name) {
            self.sources[name].clone()
        } else {
            self.tera
                .render(name, &to_context(name, vars)?)
                .map_err(|e| TemplateError::Render {
                    name: name.to_string(),
                    source: e,
                })?
        };

        check_frontmatter(name, rendered)
    }

    /// Render an ad-hoc template source through the same pipeline.
    ///
    /// `name` only labels errors.
    pub fn render_str(
        &self,
        name: &str,
        source: &str,
        vars: &Vars,
    ) -> Result<String, TemplateError> {
        let rendered = Tera::one_off(source, &to_context(name, vars)?, false).map_err(|e| {
            TemplateError::Render {
                name: name.to_string(),
                source: e,
            }
        })?;

        check_frontmatter(name, rendered)
    }

    /// Names available under a category such as `workflows`, without the
    /// category prefix or file extension.
    pub fn list(&self, category: &str) -> Vec<String> {
        let prefix = format!("{}/", category);
        let mut names: Vec<String> = self
            .sources
            .keys()
            .filter_map(|name| name.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(|rest| match rest.rsplit_once('.') {
                Some((stem, _)) => stem.to_string(),
                None => rest.to_string(),
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Resolve `category/name.*` to its full template name, if one exists.
    pub fn find(&self, category: &str, name: &str) -> Option<String> {
        let stem = format!("{}/{}.", category, name);
        self.sources
            .keys()
            .find(|key| {
                key.strip_prefix(&stem)
                    .is_some_and(|ext| !ext.is_empty() && !ext.contains(['/', '.']))
            })
            .cloned()
    }

    fn not_found(&self, name: &str) -> TemplateError {
        TemplateError::NotFound {
            name: name.to_string(),
            available: self.sources.keys().cloned().collect(),
        }
    }
}

fn to_context(name: &str, vars: &Vars) -> Result<Context, TemplateError> {
    Context::from_serialize(vars).map_err(|e| TemplateError::Render {
        name: name.to_string(),
        source: e,
    })
}

fn check_frontmatter(name: &str, rendered: String) -> Result<String, TemplateError> {
    frontmatter::validate(&rendered).map_err(|e| TemplateError::MalformedMetadata {
        name: name.to_string(),
        source: e,
    })?;
    trace!(template = name, bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

/// Read every file under `dir` keyed by its `/`-separated relative path.
fn load_dir(dir: &Path) -> Result<BTreeMap<String, String>, TemplateError> {
    let mut found = BTreeMap::new();
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|e| TemplateError::Load {
            path: current.clone(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| TemplateError::Load {
                    path: current.clone(),
                    reason: e.to_string(),
                })?
                .path();

            let hidden = path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'));
            if hidden {
                continue;
            }

            if path.is_dir() {
                pending.push(path);
                continue;
            }

            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let source = fs::read_to_string(&path).map_err(|e| TemplateError::Load {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            found.insert(name, source);
        }
    }

    Ok(found)
}

//! Template context assembly.
//!
//! A context is a flat map of variable names to JSON values. Contexts are
//! built in layers; a later layer replaces an earlier one's value for the
//! same top-level key. Nested mappings are replaced whole, never merged.

use crate::error::{BobError, Result};
use serde_json::{Map, Value};

/// Template variables keyed by name.
pub type Vars = Map<String, Value>;

/// Overlay `layer` onto `base`; `layer` wins on key collision.
pub fn overlay(base: &mut Vars, layer: Vars) {
    for (key, value) in layer {
        base.insert(key, value);
    }
}

/// Merge layers in order; later layers win on key collision.
pub fn layered<I>(layers: I) -> Vars
where
    I: IntoIterator<Item = Vars>,
{
    let mut merged = Vars::new();
    for layer in layers {
        overlay(&mut merged, layer);
    }
    merged
}

/// Build a `Vars` from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> Vars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Parse a `key=value` assignment from the command line.
///
/// `true` and `false` become booleans; everything else stays a string.
pub fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        BobError::UserError(format!(
            "invalid variable '{}': expected KEY=VALUE (e.g. --var project_name=acme)",
            raw
        ))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(BobError::UserError(format!(
            "invalid variable '{}': name must not be empty",
            raw
        )));
    }

    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    };

    Ok((key.to_string(), value))
}

/// Parse every `--var` assignment into one layer.
pub fn parse_assignments(raw: &[String]) -> Result<Vars> {
    raw.iter().map(|r| parse_assignment(r)).collect()
}

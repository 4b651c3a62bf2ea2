//! Project configuration for bob.
//!
//! This module defines the Config struct that represents `.bob/config.yaml`
//! in a target repository. The file is optional. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values. Command-line flags override the file.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::{CONFIG_DIR, CONFIG_FILE};

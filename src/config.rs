//! Run options.
//!
//! Options can be written in YAML or JSON. Every field is optional:
//!
//! ```yaml
//! diff:
//!   include_unchanged: false
//!   max_depth: 512
//! group:
//!   index_nodes: mapping   # or: sequence
//! on_failure: abort        # or: skip
//! ```

use crate::diff::DiffOptions;
use crate::error::{Error, Result};
use crate::group::GroupOptions;
use crate::item::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub diff: DiffOptions,
    pub group: GroupOptions,
    pub on_failure: FailurePolicy,
}

impl Options {
    /// Parses options from YAML (or JSON) text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads options from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

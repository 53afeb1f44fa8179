//! Generator configuration (`hashgen.config.json`).
//!
//! Every field has a default, so an empty JSON object (or no file at all) describes the
//! classic run: four templates in `iota_common/utils/containers/hash`, expanded for the
//! sizes 27, 81, 243, 6561 and 8019.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HashgenError, Result};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "hashgen.config.json";

/// Directory holding the `.tpl` files, relative to the project root.
pub const DEFAULT_BASE_DIR: &str = "iota_common/utils/containers/hash";

/// Token replaced by the size inside template bodies.
pub const DEFAULT_PLACEHOLDER: &str = "{SIZE}";

/// Sizes generated when none are configured, in generation order.
pub const DEFAULT_SIZES: [u64; 5] = [27, 81, 243, 6561, 8019];

/// What to do when a destination file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace existing files silently.
    #[default]
    Always,
    /// Replace a file only if it is unchanged since hashgen last wrote it.
    Protect,
}

impl OverwritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Protect => "protect",
        }
    }

    /// Resolve a policy by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "always" => Some(Self::Always),
            "protect" => Some(Self::Protect),
            _ => None,
        }
    }
}

/// One template file and the naming pattern of its generated copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Container family, exposed to the naming pattern as `{{kind}}`.
    pub kind: String,
    /// Template path relative to the base directory.
    pub source: String,
    /// Handlebars pattern for the output file name, e.g. `hash{{size}}_stack.c`.
    pub output: String,
}

impl TemplateEntry {
    pub fn new(kind: &str, source: &str, output: &str) -> Self {
        Self {
            kind: kind.into(),
            source: source.into(),
            output: output.into(),
        }
    }
}

/// Full description of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory containing the templates; outputs are written next to them.
    pub base_dir: PathBuf,
    /// Literal token replaced by the size.
    pub placeholder: String,
    /// Sizes to instantiate, in order.
    pub sizes: Vec<u64>,
    /// Templates to instantiate for every size, in order.
    pub templates: Vec<TemplateEntry>,
    pub overwrite: OverwritePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            placeholder: DEFAULT_PLACEHOLDER.into(),
            sizes: DEFAULT_SIZES.to_vec(),
            templates: default_templates(),
            overwrite: OverwritePolicy::default(),
        }
    }
}

/// The stack and queue source/header pairs.
pub fn default_templates() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry::new("stack", "hash_stack.c.tpl", "hash{{size}}_stack.c"),
        TemplateEntry::new("stack", "hash_stack.h.tpl", "hash{{size}}_stack.h"),
        TemplateEntry::new("queue", "hash_queue.c.tpl", "hash{{size}}_queue.c"),
        TemplateEntry::new("queue", "hash_queue.h.tpl", "hash{{size}}_queue.h"),
    ]
}

impl GeneratorConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| HashgenError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| HashgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| HashgenError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Reject configs that cannot produce a well-defined set of outputs.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(HashgenError::InvalidConfig(
                "placeholder must not be empty".into(),
            ));
        }

        if self.sizes.is_empty() {
            return Err(HashgenError::InvalidConfig("no sizes configured".into()));
        }
        let mut seen = HashSet::new();
        for size in &self.sizes {
            if !seen.insert(size) {
                return Err(HashgenError::InvalidConfig(format!(
                    "size {size} listed more than once"
                )));
            }
        }

        if self.templates.is_empty() {
            return Err(HashgenError::InvalidConfig("no templates configured".into()));
        }
        let mut sources = HashSet::new();
        for entry in &self.templates {
            if entry.source.trim().is_empty() {
                return Err(HashgenError::InvalidConfig(format!(
                    "template of kind '{}' has an empty source",
                    entry.kind
                )));
            }
            if !sources.insert(entry.source.as_str()) {
                return Err(HashgenError::InvalidConfig(format!(
                    "template {} listed more than once",
                    entry.source
                )));
            }
            if !references_size(&entry.output) {
                return Err(HashgenError::InvalidConfig(format!(
                    "output pattern '{}' does not use {{{{size}}}}",
                    entry.output
                )));
            }
        }

        Ok(())
    }
}

/// Whether a Handlebars pattern contains a `{{size}}` expression (whitespace allowed).
fn references_size(pattern: &str) -> bool {
    pattern.match_indices("{{").any(|(idx, _)| {
        let rest = pattern[idx + 2..].trim_start();
        rest.strip_prefix("size")
            .is_some_and(|tail| tail.trim_start().starts_with("}}"))
    })
}

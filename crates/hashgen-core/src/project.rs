//! Config discovery and template directory resolution.
//!
//! A hashgen project is whatever directory holds `hashgen.config.json`. Without a config
//! file the current directory is the project root and the defaults apply, which
//! reproduces the classic zero-argument run.
//!
//! ## Directory layout
//!
//! ```text
//! <root>/
//! ├── hashgen.config.json                 # optional GeneratorConfig
//! └── iota_common/utils/containers/hash/  # base_dir
//!     ├── hash_stack.c.tpl
//!     ├── hash_stack.h.tpl
//!     ├── hash_queue.c.tpl
//!     ├── hash_queue.h.tpl
//!     ├── hash27_stack.c                  # generated
//!     └── ...
//! ```

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{HashgenError, Result};
use crate::templates::embedded;

/// A loaded project: its root directory and effective configuration.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory the config's relative `base_dir` is resolved against.
    pub root: PathBuf,
    pub config: GeneratorConfig,
    /// Config file the settings came from, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
}

impl Project {
    /// Absolute or root-relative path of the template directory.
    pub fn base_dir(&self) -> PathBuf {
        self.root.join(&self.config.base_dir)
    }
}

/// Load the project described by `config_path`, falling back to defaults if it is absent.
pub fn load_project(config_path: &Path) -> Result<Project> {
    let root = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if config_path.exists() {
        let config = GeneratorConfig::load(config_path)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(Project {
            root,
            config,
            config_path: Some(config_path.to_path_buf()),
        })
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        Ok(Project {
            root,
            config: GeneratorConfig::default(),
            config_path: None,
        })
    }
}

/// Fail with [`HashgenError::BaseDirNotFound`] unless `base_dir` is an existing directory.
pub fn require_base_dir(base_dir: &Path) -> Result<()> {
    if base_dir.is_dir() {
        Ok(())
    } else {
        Err(HashgenError::BaseDirNotFound(base_dir.to_path_buf()))
    }
}

/// Write the embedded default config to `path`, replacing any existing file.
pub fn write_default_config(path: &Path) -> Result<()> {
    std::fs::write(path, embedded::DEFAULT_CONFIG).map_err(|e| HashgenError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

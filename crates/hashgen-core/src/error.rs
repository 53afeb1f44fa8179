//! Unified error types for hashgen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while planning or generating container sources.
#[derive(Error, Debug)]
pub enum HashgenError {
    // --- Configuration ---

    /// The configuration file (`hashgen.config.json`) was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration parsed but describes an impossible generation run.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A config or manifest could not be serialized to JSON.
    #[error("failed to serialize {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Manifest ---

    /// `.hashgen-manifest.json` exists but could not be read.
    #[error("failed to read manifest at {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `.hashgen-manifest.json` exists but contains invalid JSON.
    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Templates ---

    /// The directory holding the templates does not exist.
    #[error("template directory not found: {0}")]
    BaseDirNotFound(PathBuf),

    /// A template file is missing, unreadable, or not valid UTF-8.
    #[error("failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars output name rendering failed (invalid pattern or unknown variable).
    #[error("output name rendering failed: {0}")]
    OutputName(String),

    /// Two instantiations would write the same file.
    #[error("output {path} is produced more than once")]
    DuplicateOutput { path: PathBuf },

    // --- Output ---

    /// A destination was edited since it was last generated and the overwrite policy protects it.
    #[error("refusing to overwrite {0}: contents changed since last generation")]
    DestinationModified(PathBuf),

    /// Writing a generated file failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, HashgenError>`.
pub type Result<T> = std::result::Result<T, HashgenError>;

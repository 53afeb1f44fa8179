//! Persistence of generated file digests between runs.
//!
//! Under [`OverwritePolicy::Protect`](crate::config::OverwritePolicy::Protect) the
//! generator saves a [`Manifest`] to `<base_dir>/.hashgen-manifest.json` after writing,
//! and loads it on the next run to tell regenerable outputs from hand-edited ones.
//!
//! Entries accumulate across runs: a run restricted to some sizes or templates updates
//! its own outputs and keeps the digests of everything else written earlier.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{HashgenError, Result};

pub const MANIFEST_FILE: &str = ".hashgen-manifest.json";

/// SHA-256 digests of the files hashgen last wrote into a base directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Output file name -> hex digest of the content written.
    pub files: BTreeMap<String, String>,
}

impl Manifest {
    /// Record (or replace) the digest of `file_name`.
    pub fn record(&mut self, file_name: &str, contents: &[u8]) {
        self.files.insert(file_name.into(), digest(contents));
    }

    /// Whether `contents` is exactly what was recorded for `file_name`.
    pub fn matches(&self, file_name: &str, contents: &[u8]) -> bool {
        self.files
            .get(file_name)
            .is_some_and(|recorded| *recorded == digest(contents))
    }
}

/// Hex-encoded SHA-256 of `contents`.
pub fn digest(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    hex::encode(hasher.finalize())
}

/// Save a manifest to `<dir>/.hashgen-manifest.json`.
pub fn save(manifest: &Manifest, dir: &Path) -> Result<()> {
    let path = dir.join(MANIFEST_FILE);
    let json =
        serde_json::to_string_pretty(manifest).map_err(|e| HashgenError::Serialize {
            path: path.clone(),
            source: e,
        })?;
    std::fs::write(&path, json).map_err(|e| HashgenError::Write { path, source: e })?;
    Ok(())
}

/// Load the manifest from `<dir>/.hashgen-manifest.json`, if one was written.
pub fn load(dir: &Path) -> Result<Option<Manifest>> {
    let path = dir.join(MANIFEST_FILE);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(HashgenError::ManifestRead { path, source: e }),
    };
    let manifest: Manifest =
        serde_json::from_str(&contents).map_err(|e| HashgenError::ManifestParse {
            path: path.clone(),
            source: e,
        })?;
    Ok(Some(manifest))
}

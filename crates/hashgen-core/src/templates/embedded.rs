//! Compile-time embedded files.
//!
//! The path is relative to this source file (`crates/hashgen-core/src/templates/embedded.rs`).
//! Do NOT move `templates/config/hashgen.config.json` without updating the
//! `include_str!` path here; a wrong path fails the build.

pub const DEFAULT_CONFIG: &str = include_str!("../../../../templates/config/hashgen.config.json");

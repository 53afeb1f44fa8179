//! Core library for hashgen.
//!
//! Materializes fixed-size variants of the hash stack and hash queue C containers from
//! their `.tpl` templates. Every `{SIZE}` placeholder in a template is replaced with a
//! concrete size and the result is written under a size-qualified file name such as
//! `hash243_queue.h`.
//!
//! The crate is split the same way a run is:
//! - [`config`]: sizes, placeholder, template list and overwrite policy
//! - [`project`]: locating the config file and the template directory
//! - [`templates`]: placeholder substitution and output file naming
//! - [`generator`]: planning, writing and drift checking
//! - [`manifest`]: digests of generated files, used to protect hand edits

pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod project;
pub mod templates;

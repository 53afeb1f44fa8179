//! CLI command implementations for hashgen.
//!
//! Each module corresponds to a subcommand (`hashgen <command>`).

pub mod check;
pub mod generate;
pub mod init;
pub mod plan;

use std::path::Path;

use anyhow::Result;

use hashgen_core::generator::Generator;
use hashgen_core::project::{self, Project};

use crate::output;
use crate::Overrides;

/// Load the project at `config_path`, apply CLI overrides, and build its generator.
pub fn load_generator(config_path: &Path, overrides: &Overrides) -> Result<(Project, Generator)> {
    let mut project = project::load_project(config_path)?;

    if !overrides.sizes.is_empty() {
        project.config.sizes = overrides.sizes.clone();
    }
    if let Some(choice) = overrides.overwrite {
        project.config.overwrite = choice.policy();
    }
    let base_dir = match &overrides.base_dir {
        Some(dir) => {
            project.config.base_dir = dir.clone();
            dir.clone()
        }
        None => project.base_dir(),
    };

    tracing::debug!(base_dir = %base_dir.display(), "resolved template directory");
    let generator = Generator::new(project.config.clone(), base_dir);
    Ok((project, generator))
}

/// Print where the settings came from and what will be generated.
pub fn print_settings(project: &Project, generator: &Generator) {
    let source = project
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".into());
    output::print_key_value("Config", &source);
    output::print_key_value("Templates", &generator.base_dir().display().to_string());
    output::print_key_value("Sizes", &output::format_sizes(&generator.config().sizes));
    output::print_key_value("Overwrite", generator.config().overwrite.as_str());
}

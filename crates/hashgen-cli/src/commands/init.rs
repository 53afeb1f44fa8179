use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

use hashgen_core::project;

use crate::output;

/// Write the default `hashgen.config.json`.
///
/// An existing config is only replaced with `--force` or after confirmation.
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    output::print_header(&format!("hashgen init: {}", config_path.display()));

    if config_path.exists() && !force {
        let replace = Confirm::new()
            .with_prompt(format!("{} exists. Replace it?", config_path.display()))
            .default(false)
            .interact()?;
        if !replace {
            output::print_warning("Kept existing config");
            return Ok(());
        }
    }

    project::write_default_config(config_path)?;

    output::print_success(&format!("Wrote {}", config_path.display()));
    println!();
    println!("  Next steps:");
    println!("    edit sizes and templates in {}", config_path.display());
    println!("    hashgen plan");
    println!("    hashgen generate");
    println!();

    Ok(())
}

use std::path::Path;

use anyhow::Result;

use hashgen_core::generator::FileStatus;

use crate::output;
use crate::Overrides;

/// Instantiate every configured template for every configured size.
///
/// Templates are read up front, so a missing template fails the run before any output
/// is written. With `dry_run`, only the planned outputs are printed.
pub fn run(config_path: &Path, overrides: &Overrides, dry_run: bool) -> Result<()> {
    output::print_header("hashgen generate");

    let (project, generator) = super::load_generator(config_path, overrides)?;
    super::print_settings(&project, &generator);

    let plan = generator.plan()?;

    if dry_run {
        for inst in &plan {
            output::print_key_value(&inst.size.to_string(), &inst.output.display().to_string());
        }
        output::print_success(&format!("Dry run: {} files would be generated", plan.len()));
        return Ok(());
    }

    let report = generator.generate()?;
    output::print_report(&report);

    let plain_copies = report.files.iter().filter(|f| f.replacements == 0).count();
    if plain_copies > 0 {
        output::print_warning(&format!(
            "{plain_copies} outputs contain no placeholder and are plain copies"
        ));
    }

    output::print_success(&format!(
        "{} files written, {} unchanged",
        report.written(),
        report.count(FileStatus::Unchanged)
    ));

    Ok(())
}

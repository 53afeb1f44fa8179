use std::path::Path;

use anyhow::Result;

use hashgen_core::generator::DriftKind;

use crate::output;
use crate::Overrides;

/// Verify that every generated file exists and matches its template.
///
/// Exits with an error when anything is missing or stale, which makes it usable as a
/// CI gate after editing a `.tpl` file.
pub fn run(config_path: &Path, overrides: &Overrides) -> Result<()> {
    output::print_header("hashgen check");

    let (project, generator) = super::load_generator(config_path, overrides)?;
    super::print_settings(&project, &generator);

    let drift = generator.check()?;
    if drift.is_empty() {
        output::print_success("All generated files are up to date");
        return Ok(());
    }

    for d in &drift {
        let reason = match d.kind {
            DriftKind::Missing => "missing",
            DriftKind::Stale => "out of date",
        };
        output::print_error(&format!("{}: {reason}", d.path.display()));
    }
    anyhow::bail!(
        "{} generated files need regenerating, run `hashgen generate`",
        drift.len()
    );
}

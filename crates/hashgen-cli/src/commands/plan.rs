use std::path::Path;

use anyhow::Result;

use crate::output;
use crate::Overrides;

/// List the outputs a generation run would produce, in generation order.
pub fn run(config_path: &Path, overrides: &Overrides, json: bool) -> Result<()> {
    let (project, generator) = super::load_generator(config_path, overrides)?;
    let plan = generator.plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    output::print_header("hashgen plan");
    super::print_settings(&project, &generator);
    println!();
    for inst in &plan {
        println!(
            "  {:>6}  {:<6} {} -> {}",
            inst.size,
            inst.kind,
            inst.template.display(),
            inst.output.display()
        );
    }
    println!();
    output::print_success(&format!("{} outputs planned", plan.len()));

    Ok(())
}

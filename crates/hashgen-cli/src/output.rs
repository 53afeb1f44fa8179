//! Terminal output for the hashgen CLI: styled status lines and generation reports.

use console::style;

use hashgen_core::generator::{FileStatus, GeneratedFile, GenerationReport};

pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

pub fn print_error(text: &str) {
    println!("{} {}", style("[ERROR]").red().bold(), text);
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print one `[i/n] size S: ...` line per size, followed by its written files.
///
/// Sizes appear in generation order; unchanged files only count toward the summary.
pub fn print_report(report: &GenerationReport) {
    let sizes = report_sizes(report);
    for (i, size) in sizes.iter().enumerate() {
        let files: Vec<&GeneratedFile> =
            report.files.iter().filter(|f| f.size == *size).collect();
        println!(
            "{} {}",
            style(format!("[{}/{}]", i + 1, sizes.len())).dim(),
            size_summary(*size, &files)
        );
        for file in files.iter().filter(|f| f.status != FileStatus::Unchanged) {
            print_key_value(
                status_label(file.status),
                &format!(
                    "{} ({} bytes, {} replacements)",
                    file.path.display(),
                    file.bytes,
                    file.replacements
                ),
            );
        }
    }
}

fn report_sizes(report: &GenerationReport) -> Vec<u64> {
    let mut sizes = Vec::new();
    for file in &report.files {
        if !sizes.contains(&file.size) {
            sizes.push(file.size);
        }
    }
    sizes
}

fn size_summary(size: u64, files: &[&GeneratedFile]) -> String {
    let written = files
        .iter()
        .filter(|f| f.status != FileStatus::Unchanged)
        .count();
    match written {
        0 => format!("size {size}: {} files, all up to date", files.len()),
        n => format!("size {size}: {} files, {n} written", files.len()),
    }
}

fn status_label(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Created => "created",
        FileStatus::Updated => "updated",
        FileStatus::Unchanged => "unchanged",
    }
}

/// Join sizes for display, e.g. `27, 81, 243`.
pub fn format_sizes(sizes: &[u64]) -> String {
    sizes
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Split command handler

use anyhow::{bail, Result};

use burger_split::cli::Cli;
use burger_split::theme::current_theme;
use burger_split::Splitter;

/// Split the input stylesheet and print one line per generated file.
///
/// Exits non-zero (via the returned error) when the input is missing or any
/// file failed to write; the summary is printed first in the latter case.
pub fn handle(cli: &Cli) -> Result<()> {
    let config = cli.effective_config()?;
    let theme = current_theme();
    let output_dir = &config.paths.output_dir;

    let report = Splitter::new(config.template.clone())
        .dry_run(cli.dry_run)
        .run(&config.paths.input, output_dir)?;

    let verb = if report.dry_run {
        "Would generate"
    } else {
        "Generated"
    };
    for path in &report.written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("{}", theme.success_text(&format!("{}: {}", verb, name)));
    }

    for failure in &report.failed {
        eprintln!(
            "{}",
            theme.error_text(&format!(
                "Failed to write {}: {}",
                failure.path.display(),
                failure.message
            ))
        );
    }

    let summary = report.summary(output_dir);
    if report.skipped > 0 || report.overwritten > 0 || report.has_failures() {
        println!("{}", theme.warning_text(&summary));
    } else {
        println!("{}", theme.primary_text(&summary));
    }

    if report.has_failures() {
        bail!("{} file(s) could not be written", report.failed.len());
    }
    Ok(())
}

use std::error::Error;
use std::io::Write;

use crate::config::SourceConfig;
use crate::counter::LineCounter;
use crate::output::{ReportFormatter, ReportTextFormatter};
use crate::report::collect_report;
use crate::scanner::{DirectoryScanner, SourceFilter};
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

/// Run the report and map the outcome to a process exit code.
#[must_use]
pub fn run_report(config: &SourceConfig) -> i32 {
    match run_report_impl(config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Collect the report and write it to stdout.
///
/// # Errors
/// Returns an error if the walk or a file read fails, or stdout cannot be written.
pub fn run_report_impl(config: &SourceConfig) -> crate::Result<()> {
    let output = render_report(config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Collect the report for `config` and render it as console text.
///
/// # Errors
/// Returns an error if the walk or a file read fails.
pub fn render_report(config: &SourceConfig) -> crate::Result<String> {
    let scanner = DirectoryScanner::new(SourceFilter::new(config));
    let counter = LineCounter::new(config.comment_marker.as_str());
    let report = collect_report(&scanner, &counter, &config.root)?;

    ReportTextFormatter::new().format(&report)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

use std::io::Write;

use crate::error::Result;
use crate::report::{DirectorySummary, GlobalTotals, SizeReport};

use super::ReportFormatter;
use super::size::format_size;

const INDENT: &str = "  ";

/// Plain-text console report: one block per directory, then the totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportTextFormatter;

impl ReportTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_directory(output: &mut Vec<u8>, dir: &DirectorySummary) {
        writeln!(output, "{}", dir.path.display()).ok();
        writeln!(output, "{INDENT}{}", dir.files.join(", ")).ok();
        writeln!(output, "{INDENT}{} lines", dir.lines).ok();
        writeln!(output, "{INDENT}{} code lines", dir.code_lines).ok();
        writeln!(output, "{INDENT}{}", format_size(dir.size)).ok();
    }

    fn write_totals(output: &mut Vec<u8>, totals: &GlobalTotals) {
        writeln!(output).ok();
        writeln!(output, "{} lines", totals.lines).ok();
        writeln!(output, "{} code lines", totals.code_lines).ok();
        writeln!(output, "{}", format_size(totals.size)).ok();
        writeln!(output, "{:.1} % of code", totals.code_percentage()).ok();
    }
}

impl ReportFormatter for ReportTextFormatter {
    fn format(&self, report: &SizeReport) -> Result<String> {
        let mut output = Vec::new();

        for dir in &report.directories {
            Self::write_directory(&mut output, dir);
        }
        Self::write_totals(&mut output, &report.totals);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

mod size;
mod text;

pub use size::{format_size, human_readable};
pub use text::ReportTextFormatter;

use crate::error::Result;
use crate::report::SizeReport;

/// Trait for rendering a collected report.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &SizeReport) -> Result<String>;
}

//! Per-directory and whole-tree aggregation of counted source files.

mod totals;

pub use totals::{DirectorySummary, GlobalTotals};

use std::path::Path;

use tracing::{debug, info, trace};

use crate::counter::{FileOutcome, LineCounter, analyze_file};
use crate::error::Result;
use crate::scanner::{DirectoryScanner, FileFilter, FileScanner};

/// Everything the console report prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeReport {
    /// Directories with at least one counted line, in walk order.
    pub directories: Vec<DirectorySummary>,
    pub totals: GlobalTotals,
}

/// Walk `root` and aggregate every counted file into a [`SizeReport`].
///
/// # Errors
/// Returns an error if the walk fails or a source file cannot be read. Nothing
/// accumulated before the failure is returned.
pub fn collect_report<F: FileFilter>(
    scanner: &DirectoryScanner<F>,
    counter: &LineCounter,
    root: &Path,
) -> Result<SizeReport> {
    collect_with(scanner, scanner.filter(), counter, root)
}

pub(crate) fn collect_with<S: FileScanner, F: FileFilter>(
    scanner: &S,
    filter: &F,
    counter: &LineCounter,
    root: &Path,
) -> Result<SizeReport> {
    let mut report = SizeReport::default();

    for listing in scanner.scan(root)? {
        let mut summary = DirectorySummary::new(listing.path);

        for name in listing.files {
            match analyze_file(filter, counter, &summary.path, &name)? {
                FileOutcome::Counted(record) => {
                    trace!(
                        file = %name,
                        lines = record.lines,
                        code_lines = record.code_lines,
                        size = record.size,
                        "counted file"
                    );
                    report.totals.add(&record);
                    summary.add(name, &record);
                }
                FileOutcome::Empty => {
                    debug!(file = %name, "skipping empty file");
                }
                FileOutcome::NotSource => {}
            }
        }

        if summary.lines > 0 {
            report.directories.push(summary);
        }
    }

    info!(
        directories = report.directories.len(),
        lines = report.totals.lines,
        code_lines = report.totals.code_lines,
        size = report.totals.size,
        "report collected"
    );

    Ok(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

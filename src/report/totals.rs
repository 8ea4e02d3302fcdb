use std::path::PathBuf;

use crate::counter::FileRecord;

/// Counted files of one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    pub path: PathBuf,
    /// File names in the order they were counted.
    pub files: Vec<String>,
    pub lines: usize,
    pub code_lines: usize,
    pub size: u64,
}

impl DirectorySummary {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            files: Vec::new(),
            lines: 0,
            code_lines: 0,
            size: 0,
        }
    }

    pub fn add(&mut self, name: String, record: &FileRecord) {
        self.files.push(name);
        self.lines += record.lines;
        self.code_lines += record.code_lines;
        self.size += record.size;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalTotals {
    pub lines: usize,
    pub code_lines: usize,
    pub size: u64,
}

impl GlobalTotals {
    pub const fn add(&mut self, record: &FileRecord) {
        self.lines += record.lines;
        self.code_lines += record.code_lines;
        self.size += record.size;
    }

    /// Share of code lines in percent, unrounded.
    ///
    /// An empty tree has no lines to divide by and reports `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn code_percentage(&self) -> f64 {
        if self.lines == 0 {
            return 0.0;
        }
        self.code_lines as f64 / self.lines as f64 * 100.0
    }
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;

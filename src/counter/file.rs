use std::fs;
use std::path::Path;

use crate::error::{CsSizeError, Result};
use crate::scanner::FileFilter;

use super::LineCounter;

/// Size and line counts of one counted source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRecord {
    pub size: u64,
    pub lines: usize,
    pub code_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Counted(FileRecord),
    /// Rejected by the file-name filter; nothing was read.
    NotSource,
    /// Zero bytes on disk.
    Empty,
}

/// Analyze the file `name` inside `dir`.
///
/// # Errors
/// Returns an error if the file's metadata or content cannot be read, or if
/// the content is not valid UTF-8.
pub fn analyze_file<F: FileFilter>(
    filter: &F,
    counter: &LineCounter,
    dir: &Path,
    name: &str,
) -> Result<FileOutcome> {
    if !filter.is_source_file(name) {
        return Ok(FileOutcome::NotSource);
    }

    let path = dir.join(name);
    let read_error = |source| CsSizeError::FileRead {
        path: path.clone(),
        source,
    };

    let size = fs::metadata(&path).map_err(read_error)?.len();
    let bytes = fs::read(&path).map_err(read_error)?;
    let content = String::from_utf8(bytes).map_err(|_| CsSizeError::InvalidEncoding {
        path: path.clone(),
    })?;

    if size == 0 {
        return Ok(FileOutcome::Empty);
    }

    let stats = counter.count(&content);
    Ok(FileOutcome::Counted(FileRecord {
        size,
        lines: stats.total,
        code_lines: stats.code,
    }))
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

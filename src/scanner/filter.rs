use std::path::Path;

use regex::Regex;

use crate::config::SourceConfig;

/// Decides which files and directories take part in the report.
pub trait FileFilter {
    /// Whether a bare file name (no directory part) is a source file.
    fn is_source_file(&self, name: &str) -> bool;

    /// Whether files directly inside `path` should be counted.
    fn is_source_directory(&self, path: &Path) -> bool;
}

pub struct SourceFilter {
    extension: String,
    excluded_suffix: String,
    excluded_dirs: Vec<String>,
    separators: Regex,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(&SourceConfig::default())
    }
}

impl SourceFilter {
    #[must_use]
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            excluded_suffix: config.excluded_suffix.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
            separators: Regex::new(r"[/\\]").expect("Invalid regex"),
        }
    }

    /// Split a path on both `/` and `\`, dropping empty segments.
    fn segments<'p>(&self, path: &'p str) -> impl Iterator<Item = &'p str> {
        self.separators.split(path).filter(|s| !s.is_empty())
    }
}

impl FileFilter for SourceFilter {
    fn is_source_file(&self, name: &str) -> bool {
        name.ends_with(&self.extension) && !name.ends_with(&self.excluded_suffix)
    }

    fn is_source_directory(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        !self
            .segments(&path)
            .any(|segment| self.excluded_dirs.iter().any(|d| d == segment))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

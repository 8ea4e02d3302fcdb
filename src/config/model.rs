use std::path::PathBuf;

/// Directory the report walks, relative to the working directory.
pub const DEFAULT_ROOT: &str = "src";

/// Extension (including the dot) that marks a source file.
pub const SOURCE_EXTENSION: &str = ".cs";

/// Generated-file suffix excluded even though it carries the source extension.
pub const EXCLUDED_FILE_SUFFIX: &str = "GlobalUsings.cs";

/// Build output, intermediate object and IDE metadata directories.
pub const EXCLUDED_DIRECTORIES: &[&str] = &["bin", "obj", ".vs"];

/// Marker that starts a single-line comment.
pub const COMMENT_MARKER: &str = "//";

/// Fixed filter settings for a report run.
///
/// The binary always uses [`SourceConfig::default`]; other values are only
/// constructed by tests that point the walk at a temporary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub root: PathBuf,
    pub extension: String,
    pub excluded_suffix: String,
    pub excluded_dirs: Vec<String>,
    pub comment_marker: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: SOURCE_EXTENSION.to_string(),
            excluded_suffix: EXCLUDED_FILE_SUFFIX.to_string(),
            excluded_dirs: EXCLUDED_DIRECTORIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            comment_marker: COMMENT_MARKER.to_string(),
        }
    }
}

impl SourceConfig {
    /// Same filters, different root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

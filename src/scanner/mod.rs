mod filter;

pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CsSizeError, Result};

/// A directory accepted for counting, with the regular files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub files: Vec<String>,
}

/// Trait for walking a tree and listing the directories whose files should be counted.
pub trait FileScanner {
    /// Walk `root` top-down and return the accepted directories in visit order.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or a directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<DirectoryListing>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    /// List a directory's own entries, sorted by name.
    ///
    /// Symlinks that resolve to regular files are listed as files.
    ///
    /// Returns `None` when the directory has no entries at all.
    fn list_directory(dir: &Path) -> Result<Option<Vec<String>>> {
        let mut has_entries = false;
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            has_entries = true;
            // Follows symlinks, so a link to a source file counts as that file.
            if entry.path().is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(has_entries.then_some(files))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<DirectoryListing>> {
        if !root.is_dir() {
            return Err(CsSizeError::RootNotFound(root.to_path_buf()));
        }

        let mut listings = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if !self.filter.is_source_directory(path) {
                debug!(path = %path.display(), "skipping excluded directory");
                continue;
            }

            let Some(files) = Self::list_directory(path)? else {
                debug!(path = %path.display(), "skipping empty directory");
                continue;
            };

            listings.push(DirectoryListing {
                path: path.to_path_buf(),
                files,
            });
        }

        Ok(listings)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

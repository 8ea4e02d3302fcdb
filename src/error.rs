use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsSizeError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Source root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CsSizeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

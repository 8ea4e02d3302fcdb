mod file;
mod sloc;

pub use file::{FileOutcome, FileRecord, analyze_file};
pub use sloc::{LineCounter, LineStats};

use crate::config::COMMENT_MARKER;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self { total: 0, code: 0 }
    }
}

/// Counts total lines and lines that do not open with a single-line comment.
pub struct LineCounter {
    marker: String,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self::new(COMMENT_MARKER)
    }
}

impl LineCounter {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();

        for line in source.lines() {
            stats.total += 1;
            if !self.is_comment(line) {
                stats.code += 1;
            }
        }

        stats
    }

    fn is_comment(&self, line: &str) -> bool {
        line.trim_start().starts_with(&self.marker)
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;

//! Human-readable byte counts with binary (1024-based) prefixes.

const PREFIXES: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];
const TERMINAL_PREFIX: &str = "Yi";
const STEP: f64 = 1024.0;

/// Render `num` with one decimal place, stepping through binary prefixes.
///
/// The threshold test uses the magnitude, so negative values keep their sign.
/// Anything at or above 1024 Zi is shown in Yi.
#[must_use]
pub fn human_readable(num: f64, suffix: &str) -> String {
    let mut value = num;
    for prefix in PREFIXES {
        if value.abs() < STEP {
            return format!("{value:3.1} {prefix}{suffix}");
        }
        value /= STEP;
    }
    format!("{value:.1} {TERMINAL_PREFIX}{suffix}")
}

/// Render a byte count, e.g. `1536` as `"1.5 KiB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    human_readable(bytes as f64, "B")
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;

//! Size formatting for image byte counts.
//!
//! Decimal units (1 KB = 1000 B), one fractional digit.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count, e.g. `103.7 MB`.
///
/// The scale stops at TB; larger values are reported as a TB count above 1000.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1000.0 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

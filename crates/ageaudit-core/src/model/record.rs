//! Inventory records — one immutable entry per scanned regular file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::band::SECONDS_PER_YEAR;

/// A single scanned regular file: where it is, how old it is, how big it is.
///
/// Ages derive from one per-scan `now` snapshot. `age_years` is rounded to
/// 3 decimal places at construction and is the value used everywhere —
/// sorting, band filtering, and manifest output all agree because the
/// rounding happens exactly once. `age_seconds` keeps the raw signed delta;
/// a file modified in the future carries a negative age, unclamped.
///
/// Serde renames map the fields onto the manifest columns
/// `name,age in years,size in MB` (`age_seconds` is not part of manifests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Absolute path of the file. Unique key within one scan.
    #[serde(rename = "name")]
    pub path: PathBuf,

    /// Age in years since last modification, rounded to 3 decimal places.
    #[serde(rename = "age in years")]
    pub age_years: f64,

    /// Raw age in seconds since last modification.
    #[serde(skip)]
    pub age_seconds: f64,

    /// File size in decimal megabytes (1e6 bytes per MB).
    #[serde(rename = "size in MB")]
    pub size_mb: f64,
}

impl FileRecord {
    /// Build a record from a raw signed age and a byte length.
    pub fn new(path: PathBuf, age_seconds: f64, size_bytes: u64) -> Self {
        Self {
            path,
            age_years: round_dp(age_seconds / SECONDS_PER_YEAR, 3),
            age_seconds,
            size_mb: size_bytes as f64 / 1e6,
        }
    }
}

/// Round to `places` decimal places — display precision for ages (3) and
/// gigabyte totals (4).
pub(crate) fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_rounded_to_three_decimals() {
        // 300_000_000 s / 31_557_600 = 9.50642236... years
        let record = FileRecord::new("/mnt/a.dat".into(), 300_000_000.0, 0);
        assert_eq!(record.age_years, 9.506);
        assert_eq!(record.age_seconds, 300_000_000.0);
    }

    #[test]
    fn size_uses_decimal_megabytes() {
        let record = FileRecord::new("/mnt/a.dat".into(), 0.0, 2_500_000);
        assert_eq!(record.size_mb, 2.5);
    }

    /// Future modification times come through as negative ages — never
    /// clamped to zero.
    #[test]
    fn negative_age_passes_through() {
        let record = FileRecord::new("/mnt/future.dat".into(), -SECONDS_PER_YEAR / 2.0, 10);
        assert_eq!(record.age_years, -0.5);
        assert!(record.age_seconds < 0.0);
    }

    #[test]
    fn round_dp_precision() {
        assert_eq!(round_dp(1.23456789, 3), 1.235);
        assert_eq!(round_dp(1.23456789, 4), 1.2346);
        assert_eq!(round_dp(-0.0005, 3), -0.001);
        assert_eq!(round_dp(0.0, 4), 0.0);
    }
}

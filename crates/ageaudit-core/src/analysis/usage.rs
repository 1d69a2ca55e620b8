//! Aggregate disk usage.
//!
//! Sizes live on the records as decimal megabytes; floating point stays at
//! this display boundary and never feeds back into classification.

use crate::model::record::round_dp;
use crate::model::FileRecord;

/// Total disk usage of a record set in decimal gigabytes, rounded to 4
/// decimal places. Empty input totals 0.0.
///
/// Plain summation — associative and order-independent.
pub fn total_disk_usage_gb(records: &[FileRecord]) -> f64 {
    let total_mb: f64 = records.iter().map(|r| r.size_mb).sum();
    round_dp(total_mb / 1_000.0, 4)
}

//! Report generation — the audit pipeline and its outputs.

pub mod histogram;
pub mod manifest;

pub use histogram::HistogramEmitter;
pub use manifest::classify_and_write;

use std::path::PathBuf;

use tracing::info;

use crate::analysis::{extensions_of, total_disk_usage_gb};
use crate::error::AuditError;
use crate::model::{AgeBand, MAX_AGE_YEARS};
use crate::scanner;

/// Everything one audit run needs, passed explicitly — no process-wide
/// mutable state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Mounted remote-storage directory to audit.
    pub mount_path: PathBuf,
    /// Display label for the storage server backing the mount; prefixes
    /// every output file name.
    pub server_label: String,
    /// Directory receiving manifests and histograms.
    pub output_dir: PathBuf,
}

/// Counts and disk-usage totals from one audit run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub files_scanned: usize,
    pub ten_plus_files: usize,
    pub nine_to_ten_files: usize,
    /// Whole-inventory disk usage in GB, rounded to 4 decimal places.
    pub total_gb: f64,
    pub ten_plus_gb: f64,
    pub nine_to_ten_gb: f64,
}

/// Run the full audit: scan the mount, write the age-band manifests and
/// the full inventory, emit histograms for the oldest non-empty band, and
/// return the usage summary.
///
/// Output files land in `config.output_dir`, prefixed with the server
/// label: `<label>.filenames_10+years.txt`, `<label>.filenames_9_10_years.txt`,
/// `<label>.ALL_FILENAMES.txt`, plus `<label>.<suffix>.<ext>.png` images
/// when the plotting capability is present.
pub fn run_report(
    config: &ReportConfig,
    emitter: &HistogramEmitter,
) -> Result<ReportSummary, AuditError> {
    let records = scanner::scan_inventory(&config.mount_path)?;
    info!("number of files found: {}", records.len());

    let label = config.server_label.as_str();

    let ten_plus = classify_and_write(
        &records,
        AgeBand::older_than(10.0),
        &config.output_dir.join(format!("{label}.filenames_10+years.txt")),
    )?;
    let nine_to_ten = classify_and_write(
        &records,
        AgeBand::new(9.0, 10.0),
        &config
            .output_dir
            .join(format!("{label}.filenames_9_10_years.txt")),
    )?;

    info!("files older than 10 years: {}", ten_plus.len());
    info!("files 9-10 years old: {}", nine_to_ten.len());

    // Histograms cover the oldest band with anything in it; 10+ wins.
    if !ten_plus.is_empty() {
        emitter.emit(
            &ten_plus,
            &extensions_of(&ten_plus),
            label,
            "10+ years old",
            "10+years",
            &config.output_dir,
        );
    } else if !nine_to_ten.is_empty() {
        emitter.emit(
            &nine_to_ten,
            &extensions_of(&nine_to_ten),
            label,
            "9-10 years old",
            "9_10_years",
            &config.output_dir,
        );
    }

    classify_and_write(
        &records,
        AgeBand::new(0.0, MAX_AGE_YEARS),
        &config.output_dir.join(format!("{label}.ALL_FILENAMES.txt")),
    )?;

    let summary = ReportSummary {
        files_scanned: records.len(),
        ten_plus_files: ten_plus.len(),
        nine_to_ten_files: nine_to_ten.len(),
        total_gb: total_disk_usage_gb(&records),
        ten_plus_gb: total_disk_usage_gb(&ten_plus),
        nine_to_ten_gb: total_disk_usage_gb(&nine_to_ten),
    };

    info!("total file disk usage (GB): {}", summary.total_gb);
    info!(
        "total file disk usage, 9-10 years old (GB): {}",
        summary.nine_to_ten_gb
    );
    info!(
        "total file disk usage, 10+ years old (GB): {}",
        summary.ten_plus_gb
    );

    Ok(summary)
}

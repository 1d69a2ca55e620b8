//! Inventory scanner — sequential recursive walk of the audited mount.
//!
//! Produces one [`FileRecord`] per regular file. Directory structure is
//! traversal-only: nothing of it survives into the records.

use std::path::Path;

use chrono::{DateTime, Utc};
use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use crate::error::AuditError;
use crate::model::FileRecord;

/// Walk `root` recursively and produce a record for every regular file.
///
/// The age reference time is captured once before the walk, so every record
/// in a scan shares the same "now" even when the walk takes nontrivial
/// wall-clock time. Non-regular entries (directories, symlinks, devices)
/// are skipped silently. Per-file stat failures are logged and skipped so
/// concurrent activity on the mount cannot abort the audit.
///
/// Fails up front with [`AuditError::NotADirectory`] when `root` is missing
/// or not a directory.
pub fn scan_inventory(root: &Path) -> Result<Vec<FileRecord>, AuditError> {
    if !root.is_dir() {
        return Err(AuditError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let now: DateTime<Utc> = Utc::now();
    let mut records = Vec::new();

    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        // Stat each file individually; the mount may change under us.
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(err) => {
                warn!("skipping {}: stat failed: {err}", path.display());
                continue;
            }
        };

        let modified = match meta.modified() {
            Ok(t) => DateTime::<Utc>::from(t),
            Err(err) => {
                warn!("skipping {}: no modification time: {err}", path.display());
                continue;
            }
        };

        // Signed delta: a file modified in the future yields a negative age.
        let age_seconds = (now - modified).num_milliseconds() as f64 / 1_000.0;
        records.push(FileRecord::new(path, age_seconds, meta.len()));
    }

    debug!("inventory walk complete: {} records", records.len());
    Ok(records)
}

//! Age-band manifest writer.
//!
//! A manifest is the durable output of one age band: UTF-8 CSV with a
//! `name,age in years,size in MB` header and one row per matched record,
//! sorted by ascending age.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::AuditError;
use crate::model::{AgeBand, FileRecord};

/// Manifest column headers, in row order.
const MANIFEST_HEADER: [&str; 3] = ["name", "age in years", "size in MB"];

/// Sort `records` by ascending age, write the rows matching `band` to a
/// manifest at `out_path` (overwriting any previous run), and return the
/// matched subset in written order.
///
/// An empty match still produces the header line. The writer is flushed
/// before returning so a successful call means a complete file on disk.
pub fn classify_and_write(
    records: &[FileRecord],
    band: AgeBand,
    out_path: &Path,
) -> Result<Vec<FileRecord>, AuditError> {
    let mut sorted: Vec<FileRecord> = records.to_vec();
    sorted.sort_by(|a, b| a.age_years.total_cmp(&b.age_years));

    let file = File::create(out_path).map_err(|e| AuditError::io(out_path, e))?;
    // Header is written explicitly so even an empty band produces it.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(MANIFEST_HEADER)
        .map_err(|e| AuditError::manifest(out_path, e))?;

    let mut matched = Vec::new();
    for record in sorted {
        if band.contains(record.age_years) {
            writer
                .serialize(&record)
                .map_err(|e| AuditError::manifest(out_path, e))?;
            matched.push(record);
        }
    }

    writer.flush().map_err(|e| AuditError::io(out_path, e))?;
    debug!(
        "wrote {} of {} records to {}",
        matched.len(),
        records.len(),
        out_path.display()
    );
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_AGE_YEARS;
    use std::fs;
    use tempfile::TempDir;

    fn record(path: &str, age_years: f64, size_bytes: u64) -> FileRecord {
        FileRecord::new(
            path.into(),
            age_years * crate::model::SECONDS_PER_YEAR,
            size_bytes,
        )
    }

    #[test]
    fn empty_input_writes_header_only() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("empty.txt");

        let matched = classify_and_write(&[], AgeBand::new(0.0, MAX_AGE_YEARS), &out).unwrap();
        assert!(matched.is_empty());

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "name,age in years,size in MB\n");
    }

    #[test]
    fn matches_are_sorted_ascending_by_age() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("sorted.txt");
        let records = vec![
            record("/mnt/c", 12.0, 10),
            record("/mnt/a", 0.5, 10),
            record("/mnt/b", 9.5, 10),
        ];

        let matched =
            classify_and_write(&records, AgeBand::new(0.0, MAX_AGE_YEARS), &out).unwrap();
        let ages: Vec<f64> = matched.iter().map(|r| r.age_years).collect();
        assert_eq!(ages, vec![0.5, 9.5, 12.0]);
    }

    /// Band ends are strict: a record at exactly 10.0 years matches neither
    /// the 9-10 band nor the 10+ band.
    #[test]
    fn boundary_record_matches_no_adjacent_band() {
        let tmp = TempDir::new().unwrap();
        let records = vec![record("/mnt/decade", 10.0, 10)];

        let nine_to_ten =
            classify_and_write(&records, AgeBand::new(9.0, 10.0), &tmp.path().join("a.txt"))
                .unwrap();
        let ten_plus =
            classify_and_write(&records, AgeBand::older_than(10.0), &tmp.path().join("b.txt"))
                .unwrap();

        assert!(nine_to_ten.is_empty());
        assert!(ten_plus.is_empty());
    }

    /// Every record inside the band is returned and written; nothing
    /// outside it leaks in.
    #[test]
    fn band_filtering_is_sound_and_complete() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("band.txt");
        let records = vec![
            record("/mnt/young", 3.0, 10),
            record("/mnt/mid", 9.5, 10),
            record("/mnt/old", 11.0, 10),
        ];

        let matched = classify_and_write(&records, AgeBand::new(9.0, 10.0), &out).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].path, Path::new("/mnt/mid").to_path_buf());

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("/mnt/mid"));
        assert!(!content.contains("/mnt/young"));
        assert!(!content.contains("/mnt/old"));
    }

    #[test]
    fn existing_manifest_is_overwritten() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("manifest.txt");
        fs::write(&out, "stale content from a previous run\n").unwrap();

        classify_and_write(&[], AgeBand::new(0.0, MAX_AGE_YEARS), &out).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert!(!content.contains("stale content"));
    }

    /// Reading a manifest back through the csv reader reproduces the
    /// matched set (paths, rounded ages, sizes).
    #[test]
    fn manifest_round_trips_through_csv_reader() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("roundtrip.txt");
        let records = vec![
            record("/mnt/a.dat", 0.5, 1_000_000),
            record("/mnt/b.dat", 9.5, 2_000_000),
        ];

        let matched =
            classify_and_write(&records, AgeBand::new(0.0, MAX_AGE_YEARS), &out).unwrap();

        let mut reader = csv::Reader::from_path(&out).unwrap();
        let reread: Vec<FileRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(reread.len(), matched.len());
        for (back, original) in reread.iter().zip(&matched) {
            assert_eq!(back.path, original.path);
            assert_eq!(back.age_years, original.age_years);
            assert_eq!(back.size_mb, original.size_mb);
        }
    }
}

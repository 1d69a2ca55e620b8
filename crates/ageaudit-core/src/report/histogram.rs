//! Per-extension age histograms — optional visualization capability.
//!
//! Rendering is compiled behind the `histograms` feature. Without it the
//! emitter degrades to a no-op that warns once per skipped extension;
//! manifest generation is never blocked by the missing capability.

use std::collections::BTreeSet;
use std::path::Path;

use compact_str::CompactString;
use tracing::warn;

use crate::model::FileRecord;

/// Emits one age-distribution image per file extension.
///
/// The capability flag is resolved once at construction and threaded
/// through every call — there is no runtime import probing and no global
/// state.
#[derive(Debug, Clone, Copy)]
pub struct HistogramEmitter {
    enabled: bool,
}

impl HistogramEmitter {
    /// Emitter reflecting what this build can do: enabled iff the
    /// `histograms` feature was compiled in.
    pub fn detect() -> Self {
        Self {
            enabled: cfg!(feature = "histograms"),
        }
    }

    /// Emitter that always takes the warn-and-skip path.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// For each extension: collect the ages of records whose path ends with
    /// that extension (case-insensitive) and render their distribution to
    /// `{label}.{filename_suffix}.{extension minus dot}.png` under
    /// `out_dir`, overwriting previous runs. Every failure degrades to a
    /// warning; this method never fails the run.
    pub fn emit(
        &self,
        records: &[FileRecord],
        extensions: &BTreeSet<CompactString>,
        label: &str,
        title_suffix: &str,
        filename_suffix: &str,
        out_dir: &Path,
    ) {
        for ext in extensions {
            let out_path = out_dir.join(histogram_filename(label, filename_suffix, ext));
            if !self.enabled {
                warn!(
                    "{} will not be created: plotting capability unavailable",
                    out_path.display()
                );
                continue;
            }
            self.render_one(records, ext.as_str(), label, title_suffix, &out_path);
        }
    }

    #[cfg(feature = "histograms")]
    fn render_one(
        &self,
        records: &[FileRecord],
        ext: &str,
        label: &str,
        title_suffix: &str,
        out_path: &Path,
    ) {
        let ages = ages_for_extension(records, ext);
        if ages.is_empty() {
            return;
        }
        let title = format!("{label}: {title_suffix} ({ext} extension)");
        if let Err(err) = render::age_histogram(out_path, &title, &ages) {
            warn!("failed to render {}: {err}", out_path.display());
        }
    }

    #[cfg(not(feature = "histograms"))]
    fn render_one(
        &self,
        _records: &[FileRecord],
        _ext: &str,
        _label: &str,
        _title_suffix: &str,
        out_path: &Path,
    ) {
        // `enabled` is never true without the plotting backend compiled in;
        // keep the path total rather than panicking.
        warn!(
            "{} will not be created: plotting capability unavailable",
            out_path.display()
        );
    }
}

/// Join label, suffix, extension (dot stripped), and the image-format
/// marker into the output file name.
fn histogram_filename(label: &str, filename_suffix: &str, ext: &str) -> String {
    let bare = ext.replace('.', "");
    format!("{label}.{filename_suffix}.{bare}.png")
}

/// Ages of every record whose path ends with `ext`, compared
/// case-insensitively.
#[cfg_attr(not(feature = "histograms"), allow(dead_code))]
fn ages_for_extension(records: &[FileRecord], ext: &str) -> Vec<f64> {
    let needle = ext.to_lowercase();
    records
        .iter()
        .filter(|r| r.path.to_string_lossy().to_lowercase().ends_with(&needle))
        .map(|r| r.age_years)
        .collect()
}

#[cfg(feature = "histograms")]
mod render {
    use std::error::Error;
    use std::path::Path;

    use plotters::prelude::*;

    /// Equal-width bins over the observed age range.
    const BIN_COUNT: usize = 10;

    pub(super) fn age_histogram(
        out_path: &Path,
        title: &str,
        ages: &[f64],
    ) -> Result<(), Box<dyn Error>> {
        let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // A single distinct age gives a zero-width range; widen it so the
        // bar still has area.
        let (min, max) = if max - min < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let width = (max - min) / BIN_COUNT as f64;
        let mut counts = [0u32; BIN_COUNT];
        for &age in ages {
            let bin = (((age - min) / width) as usize).min(BIN_COUNT - 1);
            counts[bin] += 1;
        }
        let y_max = counts.iter().copied().max().unwrap_or(1).max(1);

        let root = BitMapBackend::new(out_path, (900, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(48)
            .build_cartesian_2d(min..max, 0u32..y_max + 1)?;

        chart
            .configure_mesh()
            .x_desc("age (years)")
            .y_desc("files")
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + width * i as f64;
            let x1 = x0 + width;
            Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.6).filled())
        }))?;

        root.present()?;
        Ok(())
    }
}

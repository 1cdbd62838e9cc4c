//! File size distribution histogram.
//!
//! Bins every sized file entry into 50 equal-width buckets and draws the
//! counts on a logarithmic Y axis, so the long tail of large files stays
//! visible next to the mass of small ones.

use super::{render_error, FILE_SIZE_DISTRIBUTION_PNG};
use crate::errors::{AppError, AppResult};
use crate::types::Report;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const BIN_COUNT: usize = 50;

/// Render `file_size_distribution.png` into `output_dir`.
pub fn render_file_size_distribution(report: &Report, output_dir: &Path) -> AppResult<()> {
    let sizes = report.file_sizes();
    if sizes.is_empty() {
        return Err(AppError::InvalidData(
            "report contains no file entries with a size field".to_string(),
        ));
    }

    let (lo, hi, counts) = bin_sizes(&sizes, BIN_COUNT);
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1) as f64;

    let path = output_dir.join(FILE_SIZE_DISTRIBUTION_PNG);
    let root = BitMapBackend::new(&path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("File Size Distribution", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(lo..hi, (0.5f64..max_count * 2.0).log_scale())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Size (bytes)")
        .y_desc("Count")
        .draw()
        .map_err(render_error)?;

    let bin_width = (hi - lo) / BIN_COUNT as f64;
    chart
        .draw_series(
            counts
                .iter()
                .enumerate()
                .filter(|(_, &count)| count > 0)
                .map(|(idx, &count)| {
                    let x0 = lo + idx as f64 * bin_width;
                    // Bars rise from the log-axis floor, not from zero
                    Rectangle::new([(x0, 0.5), (x0 + bin_width, count as f64)], BLUE.filled())
                }),
        )
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Split `sizes` into `bin_count` equal-width bins over the observed range.
///
/// Returns the range bounds and the per-bin counts. A degenerate range (all
/// sizes equal) is widened to one byte so every value lands in the first bin.
fn bin_sizes(sizes: &[f64], bin_count: usize) -> (f64, f64, Vec<u64>) {
    let lo = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > lo { max - lo } else { 1.0 };

    let mut counts = vec![0u64; bin_count];
    for &size in sizes {
        let mut idx = ((size - lo) / span * bin_count as f64) as usize;
        if idx >= bin_count {
            idx = bin_count - 1;
        }
        counts[idx] += 1;
    }

    (lo, lo + span, counts)
}

//! File type distribution pie chart.
//!
//! One slice per type label, annotated with its share of the whole to one
//! decimal place. An empty mapping still produces the (sliceless) image.

use super::{render_error, FILE_TYPE_DISTRIBUTION_PNG};
use crate::errors::AppResult;
use crate::types::Report;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Render `file_type_distribution.png` into `output_dir`.
pub fn render_file_type_distribution(report: &Report, output_dir: &Path) -> AppResult<()> {
    let labels: Vec<String> = report.file_types.keys().cloned().collect();
    let sizes: Vec<f64> = report.file_types.values().map(|&count| count as f64).collect();
    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|idx| {
            let (r, g, b) = Palette99::COLORS[idx % Palette99::COLORS.len()];
            RGBColor(r, g, b)
        })
        .collect();

    let path = output_dir.join(FILE_TYPE_DISTRIBUTION_PNG);
    let root = BitMapBackend::new(&path, (800, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    root.titled("File Type Distribution", ("sans-serif", 30))
        .map_err(render_error)?;

    if !sizes.is_empty() {
        let center = (400, 420);
        let radius = 280.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 20).into_font());
        pie.percentages(("sans-serif", 18).into_font());
        root.draw(&pie).map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    info!("Wrote {}", path.display());
    Ok(())
}

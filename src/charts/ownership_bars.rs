//! Files-per-user bar chart.
//!
//! One vertical bar per user identifier, bar height equal to that user's
//! file count.

use super::{render_error, FILES_PER_USER_PNG};
use crate::errors::AppResult;
use crate::types::Report;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Render `files_per_user.png` into `output_dir`.
pub fn render_files_per_user(report: &Report, output_dir: &Path) -> AppResult<()> {
    let users: Vec<String> = report.ownership.keys().cloned().collect();
    let counts: Vec<u64> = report.ownership.values().copied().collect();
    let max_count = counts.iter().copied().max().unwrap_or(0) + 1;

    let path = output_dir.join(FILES_PER_USER_PNG);
    let root = BitMapBackend::new(&path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Files per User", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(55)
        .build_cartesian_2d((0..users.len().max(1)).into_segmented(), 0u64..max_count)
        .map_err(render_error)?;

    let user_labels = users.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("User ID")
        .y_desc("Number of Files")
        .x_labels(users.len().max(1))
        .x_label_formatter(&move |segment| match segment {
            SegmentValue::CenterOf(idx) => user_labels.get(*idx).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(idx, &count)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0),
                    (SegmentValue::Exact(idx + 1), count),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    info!("Wrote {}", path.display());
    Ok(())
}

//! Chart renderers for the inventory report.
//!
//! Each renderer writes one PNG into the output directory (the directory the
//! input report lives in). Renderers are independent of each other: every
//! chart gets its own drawing area, and a failure in one aborts the run
//! because they execute sequentially.

pub mod ownership_bars;
pub mod size_histogram;
pub mod type_pie;

pub use ownership_bars::render_files_per_user;
pub use size_histogram::render_file_size_distribution;
pub use type_pie::render_file_type_distribution;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Output filename for the file size histogram
pub const FILE_SIZE_DISTRIBUTION_PNG: &str = "file_size_distribution.png";
/// Output filename for the file type pie chart
pub const FILE_TYPE_DISTRIBUTION_PNG: &str = "file_type_distribution.png";
/// Output filename for the files-per-user bar chart
pub const FILES_PER_USER_PNG: &str = "files_per_user.png";

/// Verify the output directory exists before any drawing happens.
pub fn ensure_output_dir(dir: &Path) -> AppResult<()> {
    if !dir.is_dir() {
        return Err(AppError::OutputDirNotFound(dir.display().to_string()));
    }
    Ok(())
}

/// Stringify a plotters backend error into the application error type.
///
/// The backend error type is generic over the drawing backend, so renderers
/// convert at the boundary rather than carrying the type parameter around.
pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Render(err.to_string())
}

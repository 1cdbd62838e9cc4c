//! Markdown summary writer.
//!
//! Composes a fixed-template summary page referencing the three chart images
//! by relative filename and writes it beside them, overwriting any previous
//! summary.

use crate::charts::{FILES_PER_USER_PNG, FILE_SIZE_DISTRIBUTION_PNG, FILE_TYPE_DISTRIBUTION_PNG};
use crate::errors::AppResult;
use crate::types::Report;
use std::fs;
use std::path::Path;
use tracing::info;

/// Output filename for the Markdown summary
pub const SUMMARY_REPORT_MD: &str = "summary_report.md";

/// Compose the summary document for a report.
pub fn summary_markdown(report: &Report) -> String {
    format!(
        "# System Report Summary\n\
         \n\
         - **Total Size**: {total_size} bytes\n\
         - **Total Files**: {total_files}\n\
         \n\
         ## File Type Distribution\n\
         \n\
         ![File Type Distribution]({type_png})\n\
         \n\
         ## File Size Distribution\n\
         \n\
         ![File Size Distribution]({size_png})\n\
         \n\
         ## Files per User\n\
         \n\
         ![Files per User]({user_png})\n",
        total_size = report.total_size,
        total_files = report.files.len(),
        type_png = FILE_TYPE_DISTRIBUTION_PNG,
        size_png = FILE_SIZE_DISTRIBUTION_PNG,
        user_png = FILES_PER_USER_PNG,
    )
}

/// Write `summary_report.md` into `output_dir`, overwriting any existing file.
pub fn write_summary(report: &Report, output_dir: &Path) -> AppResult<()> {
    let path = output_dir.join(SUMMARY_REPORT_MD);
    fs::write(&path, summary_markdown(report))?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_report() -> Report {
        serde_json::from_str(
            r#"{"total_size": 2048, "file_types": {"py": 3, "md": 1},
                "ownership": {"alice": 2, "bob": 2},
                "files": [{"size": 512}, {"size": 1024}, {"size": 256}, {"size": 256}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn summary_carries_totals_and_image_references() {
        let markdown = summary_markdown(&example_report());

        assert!(markdown.starts_with("# System Report Summary\n"));
        assert!(markdown.contains("Total Size**: 2048 bytes"));
        assert!(markdown.contains("Total Files**: 4"));
        assert!(markdown.contains("![File Type Distribution](file_type_distribution.png)"));
        assert!(markdown.contains("![File Size Distribution](file_size_distribution.png)"));
        assert!(markdown.contains("![Files per User](files_per_user.png)"));
    }

    #[test]
    fn absent_total_size_reads_as_zero() {
        let markdown = summary_markdown(&Report::default());
        assert!(markdown.contains("Total Size**: 0 bytes"));
        assert!(markdown.contains("Total Files**: 0"));
    }

    #[test]
    fn write_summary_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SUMMARY_REPORT_MD);
        fs::write(&path, "stale contents").unwrap();

        write_summary(&example_report(), dir.path()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Total Size**: 2048 bytes"));
        assert!(!written.contains("stale contents"));
    }
}

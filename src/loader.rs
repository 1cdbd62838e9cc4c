//! Report loader: reads a JSON inventory report from disk.

use crate::errors::{AppError, AppResult};
use crate::types::Report;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load and parse the report at `path`.
///
/// A missing file is reported explicitly; malformed JSON surfaces as an
/// `InvalidData` error and terminates the run.
pub fn load_report(path: &Path) -> AppResult<Report> {
    if !path.exists() {
        return Err(AppError::ReportNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let report: Report = serde_json::from_str(&contents)?;

    info!(
        "Loaded report from {} ({} file entries)",
        path.display(),
        report.files.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_report_is_reported_explicitly() {
        let err = load_report(Path::new("/nonexistent/report.json")).unwrap_err();
        match err {
            AppError::ReportNotFound(path) => assert!(path.contains("report.json")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn valid_report_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"total_size": 2048, "file_types": {{"py": 3}}, "ownership": {{"alice": 2}}, "files": [{{"size": 512}}]}}"#
        )
        .unwrap();

        let report = load_report(&path).unwrap();
        assert_eq!(report.total_size, 2048);
        assert_eq!(report.file_types.get("py"), Some(&3));
        assert_eq!(report.ownership.get("alice"), Some(&2));
        assert_eq!(report.files.len(), 1);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, AppError::InvalidData(_)));
    }
}

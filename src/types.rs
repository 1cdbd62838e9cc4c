//! Parsed representation of a system inventory report.
//!
//! The report is produced by an external inventory process and consumed
//! read-only for the duration of a run. Every top-level key is optional:
//! absent keys fall back to empty containers (zero for `total_size`), which
//! is the only schema leniency the tool provides.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One inventoried file. Only the size matters for visualisation; entries
/// without a `size` field are skipped when the histogram is built.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub size: Option<f64>,
}

/// Top-level inventory report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Report {
    /// Aggregate byte size across all inventoried files
    #[serde(default)]
    pub total_size: u64,

    /// Extension/category label -> file count
    #[serde(default)]
    pub file_types: BTreeMap<String, u64>,

    /// User identifier -> file count
    #[serde(default)]
    pub ownership: BTreeMap<String, u64>,

    /// Per-file records, in producer order
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl Report {
    /// Sizes of all file entries that actually carry a `size` field.
    pub fn file_sizes(&self) -> Vec<f64> {
        self.files.iter().filter_map(|entry| entry.size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let report: Report = serde_json::from_str("{}").unwrap();
        assert_eq!(report.total_size, 0);
        assert!(report.file_types.is_empty());
        assert!(report.ownership.is_empty());
        assert!(report.files.is_empty());
    }

    #[test]
    fn unknown_entry_fields_are_ignored() {
        let report: Report = serde_json::from_str(
            r#"{"files": [{"path": "/etc/passwd", "size": 512, "owner": 0}]}"#,
        )
        .unwrap();
        assert_eq!(report.file_sizes(), vec![512.0]);
    }

    #[test]
    fn entries_without_size_are_skipped() {
        let report: Report = serde_json::from_str(
            r#"{"files": [{"size": 100}, {}, {"size": null}, {"size": 200}]}"#,
        )
        .unwrap();
        assert_eq!(report.files.len(), 4);
        assert_eq!(report.file_sizes(), vec![100.0, 200.0]);
    }
}

//! Export report with per-file details.

use crate::model::PartKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file written during export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenFile {
    /// File name relative to the output directory
    pub filename: String,

    /// How the content was rendered
    pub kind: PartKind,

    /// Bytes written
    pub bytes: usize,
}

/// Result of exporting a unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportReport {
    /// Directory that received the files
    pub output_dir: PathBuf,

    /// Files in write order
    pub files: Vec<WrittenFile>,
}

impl ExportReport {
    /// Create an empty report for a directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            files: Vec::new(),
        }
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total bytes written.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Number of files of the given kind.
    pub fn count_kind(&self, kind: PartKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Export of annotated parts and the unit summary.
//!
//! The exporter owns one output directory. It refuses to reuse an existing
//! directory and writes files one at a time without rollback: if a later
//! write fails, files already written stay on disk.

mod layout;
mod report;

pub use layout::{output_dir_for, UNIT_FILENAME};
pub use report::{ExportReport, WrittenFile};

use std::fs;
use std::io;
use std::iter;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::model::{OutlineEntry, Part, PartKind, Record, Unit, TEXT_KEY};

/// Key of the outline sequence in the unit summary.
pub const OUTLINE_KEY: &str = "outline";

/// Split a unit into its reading part and its summary record.
///
/// The summary keeps the unit's fields minus `reading` and `preface`, with
/// `outline` listing the reading followed by `questions` in order. An
/// existing `outline` key is replaced in place.
pub fn build_summary(unit: Unit, questions: &[Part]) -> Result<(Part, Record)> {
    let (reading, mut summary) = unit.into_summary_parts();
    if reading.is_none() {
        log::warn!("Unit has no reading; writing an empty reading file");
    }

    let reading = Part::reading(reading);
    let outline: Vec<OutlineEntry> = iter::once(&reading)
        .chain(questions)
        .map(Part::outline_entry)
        .collect();

    let outline = serde_yaml::to_value(outline).map_err(Error::Serialize)?;
    summary.insert(Value::String(OUTLINE_KEY.to_string()), outline);

    Ok((reading, summary))
}

/// Render a part's file content.
///
/// Markdown parts yield their `text` field (empty when missing or not a
/// scalar); data parts yield their body as YAML.
pub fn render_part(part: &Part) -> Result<String> {
    match part.kind {
        PartKind::Markdown => Ok(part.markdown_text().unwrap_or_else(|| {
            if part.body.contains_key(TEXT_KEY) {
                log::warn!("{}: text is not a scalar, writing empty file", part.filename());
            }
            String::new()
        })),
        PartKind::Data => serde_yaml::to_string(&part.body).map_err(Error::Serialize),
    }
}

/// Render the unit summary as YAML.
pub fn render_summary(summary: &Record) -> Result<String> {
    serde_yaml::to_string(summary).map_err(Error::Serialize)
}

/// Writer for one unit's output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// Create an exporter for a directory. Nothing is created yet.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fail early if the output directory already exists.
    pub fn check_available(&self) -> Result<()> {
        if self.output_dir.exists() {
            return Err(Error::OutputExists(self.output_dir.clone()));
        }
        Ok(())
    }

    /// Create the output directory. Parent directories must exist.
    pub fn create_output_dir(&self) -> Result<()> {
        fs::create_dir(&self.output_dir).map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::OutputExists(self.output_dir.clone()),
            _ => Error::Write {
                path: self.output_dir.clone(),
                source,
            },
        })?;
        log::info!("Created {}", self.output_dir.display());
        Ok(())
    }

    /// Write one part to its file.
    pub fn export_part(&self, part: &Part) -> Result<WrittenFile> {
        let content = render_part(part)?;
        self.write_file(part.filename(), part.kind, &content)
    }

    /// Write the unit summary to `_unit.yml`.
    pub fn export_unit(&self, summary: &Record) -> Result<WrittenFile> {
        let content = render_summary(summary)?;
        self.write_file(UNIT_FILENAME, PartKind::Data, &content)
    }

    fn write_file(&self, filename: &str, kind: PartKind, content: &str) -> Result<WrittenFile> {
        let path = self.output_dir.join(filename);
        if path.exists() {
            log::warn!("Overwriting {} (duplicate file name)", path.display());
        }
        fs::write(&path, content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {} ({} bytes)", path.display(), content.len());

        Ok(WrittenFile {
            filename: filename.to_string(),
            kind,
            bytes: content.len(),
        })
    }
}

//! Multi-document YAML reader for unit files.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::model::{QuestionDocument, Record, Unit, UnitSource};

/// Reader for a unit file.
///
/// The input is a YAML stream. Document 0 is the unit, documents 1..N are
/// question documents; the split is purely positional.
pub struct UnitReader {
    source: String,
}

impl UnitReader {
    /// Open a unit file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read {} bytes from {}", source.len(), path.display());
        Ok(Self { source })
    }

    /// Read a unit from a string.
    pub fn from_text(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a unit from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self { source })
    }

    /// Parse every document into a record, in stream order.
    ///
    /// Merge keys (`<<`) are expanded. An empty first document is an empty
    /// unit; later empty documents are skipped. `index` in errors is the
    /// document's position in the stream.
    pub fn records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        for (index, document) in serde_yaml::Deserializer::from_str(&self.source).enumerate() {
            let mut value =
                Value::deserialize(document).map_err(|source| Error::Parse { index, source })?;
            value
                .apply_merge()
                .map_err(|source| Error::Parse { index, source })?;

            match value {
                Value::Null if index == 0 => {
                    log::warn!("Unit document is empty");
                    records.push(Record::new());
                }
                Value::Null => log::warn!("Skipping empty document {}", index),
                Value::Mapping(mapping) => records.push(mapping),
                _ => return Err(Error::NotAMapping { index }),
            }
        }

        Ok(records)
    }

    /// Parse the stream and split it into the unit and its questions.
    pub fn read(&self) -> Result<UnitSource> {
        let mut records = self.records()?.into_iter();
        let unit = records.next().map(Unit::new).ok_or(Error::EmptyInput)?;

        let questions: Vec<QuestionDocument> = records
            .enumerate()
            .map(|(index, fields)| QuestionDocument::new(index, fields))
            .collect();

        log::info!("Parsed unit with {} question documents", questions.len());

        Ok(UnitSource { unit, questions })
    }
}

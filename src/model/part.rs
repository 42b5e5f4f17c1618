//! Annotated parts ready for export.

use super::question::TEXT_KEY;
use super::Record;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// File name of the synthetic reading part.
pub const READING_FILENAME: &str = "reading.md";

/// How a part is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    /// The `text` field is written verbatim as Markdown
    Markdown,

    /// The remaining fields are written as a YAML document
    Data,
}

impl PartKind {
    /// File extension for this kind, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            PartKind::Markdown => ".md",
            PartKind::Data => ".yml",
        }
    }
}

/// Metadata derived for a part during annotation.
///
/// Field order matches the outline entry layout: `count` first, then
/// `filename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Repetition hint, present only when it exceeded the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value>,

    /// Output file name, relative to the output directory
    pub filename: String,
}

impl Meta {
    /// Metadata with only a file name.
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            count: None,
            filename: filename.into(),
        }
    }
}

/// One entry of the unit outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutlineEntry {
    /// Bare file name
    File(String),

    /// File name with extra metadata
    Detailed(Meta),
}

impl OutlineEntry {
    /// The referenced file name.
    pub fn filename(&self) -> &str {
        match self {
            OutlineEntry::File(name) => name,
            OutlineEntry::Detailed(meta) => &meta.filename,
        }
    }
}

impl From<&Meta> for OutlineEntry {
    fn from(meta: &Meta) -> Self {
        if meta.count.is_none() {
            OutlineEntry::File(meta.filename.clone())
        } else {
            OutlineEntry::Detailed(meta.clone())
        }
    }
}

/// An annotated document: body fields plus the metadata that decides where
/// and how it is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// How the part is written
    pub kind: PartKind,

    /// Derived metadata
    pub meta: Meta,

    /// Fields retained for export
    pub body: Record,
}

impl Part {
    /// Create a part.
    pub fn new(kind: PartKind, meta: Meta, body: Record) -> Self {
        Self { kind, meta, body }
    }

    /// The synthetic Markdown part holding a unit's reading passage.
    pub fn reading(text: Option<Value>) -> Self {
        let mut body = Record::new();
        if let Some(text) = text {
            body.insert(Value::String(TEXT_KEY.to_string()), text);
        }
        Self::new(
            PartKind::Markdown,
            Meta::with_filename(READING_FILENAME),
            body,
        )
    }

    /// Output file name.
    pub fn filename(&self) -> &str {
        &self.meta.filename
    }

    /// The outline entry referencing this part.
    pub fn outline_entry(&self) -> OutlineEntry {
        OutlineEntry::from(&self.meta)
    }

    /// The `text` field as Markdown source.
    ///
    /// Strings are returned as-is and other scalars in their plain form.
    /// Returns `None` when the field is missing or not a scalar.
    pub fn markdown_text(&self) -> Option<String> {
        match self.body.get(TEXT_KEY)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_entry_bare() {
        let meta = Meta::with_filename("a.yml");
        assert_eq!(OutlineEntry::from(&meta), OutlineEntry::File("a.yml".into()));
    }

    #[test]
    fn test_outline_entry_detailed() {
        let meta = Meta {
            count: Some(Value::from(5)),
            filename: "drill.yml".into(),
        };
        let entry = OutlineEntry::from(&meta);
        assert_eq!(entry.filename(), "drill.yml");

        let yaml = serde_yaml::to_string(&entry).unwrap();
        assert_eq!(yaml, "count: 5\nfilename: drill.yml\n");
    }

    #[test]
    fn test_reading_part() {
        let part = Part::reading(Some(Value::String("Intro text".into())));
        assert_eq!(part.kind, PartKind::Markdown);
        assert_eq!(part.filename(), READING_FILENAME);
        assert_eq!(part.markdown_text().as_deref(), Some("Intro text"));
    }

    #[test]
    fn test_reading_part_missing_text() {
        let part = Part::reading(None);
        assert!(part.markdown_text().is_none());
    }

    #[test]
    fn test_kind_extension() {
        assert_eq!(PartKind::Markdown.extension(), ".md");
        assert_eq!(PartKind::Data.extension(), ".yml");
    }
}

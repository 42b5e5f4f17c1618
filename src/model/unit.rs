//! Unit-level types.

use super::{QuestionDocument, Record};
use serde_yaml::Value;

/// Key holding the lead reading passage.
pub const READING_KEY: &str = "reading";

/// Key holding the preface, which is never exported.
pub const PREFACE_KEY: &str = "preface";

/// The first document of a unit file.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    fields: Record,
}

impl Unit {
    /// Wrap a parsed record.
    pub fn new(fields: Record) -> Self {
        Self { fields }
    }

    /// All fields in source order.
    pub fn fields(&self) -> &Record {
        &self.fields
    }

    /// The reading passage, if present.
    pub fn reading(&self) -> Option<&Value> {
        self.fields.get(READING_KEY)
    }

    /// Split the unit into its reading and the fields that go to the summary.
    ///
    /// `reading` and `preface` are removed; remaining keys keep their order.
    pub fn into_summary_parts(mut self) -> (Option<Value>, Record) {
        let reading = self.fields.shift_remove(READING_KEY);
        self.fields.shift_remove(PREFACE_KEY);
        (reading, self.fields)
    }
}

/// A parsed unit file: the unit record plus its question documents in order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSource {
    /// The unit record (document 0)
    pub unit: Unit,

    /// Question documents (documents 1..N)
    pub questions: Vec<QuestionDocument>,
}

impl UnitSource {
    /// Number of question documents.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

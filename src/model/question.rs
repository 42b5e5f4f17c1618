//! Question document type.

use super::Record;
use serde_yaml::Value;

/// Key holding the question prompt.
pub const QUESTIONS_KEY: &str = "questions";

/// Key holding the repetition hint.
pub const COUNT_KEY: &str = "count";

/// Key holding the Markdown body.
pub const TEXT_KEY: &str = "text";

/// One question document (document 1..N of a unit file).
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDocument {
    /// Position among question documents (0-based, unit excluded)
    pub index: usize,

    /// All fields in source order
    pub fields: Record,
}

impl QuestionDocument {
    /// Create a question document at the given position.
    pub fn new(index: usize, fields: Record) -> Self {
        Self { index, fields }
    }

    /// The raw `questions` value.
    pub fn questions(&self) -> Option<&Value> {
        self.fields.get(QUESTIONS_KEY)
    }

    /// The `questions` value if it is a string.
    pub fn questions_text(&self) -> Option<&str> {
        self.questions().and_then(Value::as_str)
    }

    /// The `count` value as a number, if it is numeric.
    pub fn count(&self) -> Option<f64> {
        self.fields.get(COUNT_KEY).and_then(Value::as_f64)
    }

    /// The `text` body, if present.
    pub fn text(&self) -> Option<&Value> {
        self.fields.get(TEXT_KEY)
    }

    /// Render the `questions` value for display.
    ///
    /// Strings are shown as-is, other values as YAML, and a missing field as
    /// an empty string.
    pub fn display_questions(&self) -> String {
        match self.questions() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default(),
        }
    }
}

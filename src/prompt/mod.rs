//! Operator prompts for naming question files.
//!
//! Naming is the only interactive step. A [`Namer`] receives every question
//! document up front and returns one answer per document, in order. The
//! pipeline does not touch the filesystem until the namer returns, so a
//! cancelled prompt leaves nothing behind.

mod preset;
mod terminal;

pub use preset::PresetNamer;
pub use terminal::{TerminalNamer, SEPARATOR};

use crate::error::Result;
use crate::model::QuestionDocument;

/// Source of operator answers.
pub trait Namer {
    /// Collect one file name answer per question, keyed by position.
    ///
    /// An empty answer asks for an auto-generated name. Returning
    /// [`Error::Cancelled`](crate::Error::Cancelled) aborts the run.
    fn name_all(&mut self, questions: &[QuestionDocument]) -> Result<Answers>;
}

/// Positional answers collected by a [`Namer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(Vec<String>);

impl Answers {
    /// Wrap answers in document order.
    pub fn new(answers: Vec<String>) -> Self {
        Self(answers)
    }

    /// Answer for a position, or `""` when none was given.
    pub fn get(&self, position: usize) -> &str {
        self.0.get(position).map(String::as_str).unwrap_or("")
    }

    /// Number of collected answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no answers were collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Answers {
    fn from(answers: Vec<String>) -> Self {
        Self::new(answers)
    }
}

//! Record types for unit content.
//!
//! A unit file is a YAML stream: the first document is the [`Unit`], every
//! following document is a [`QuestionDocument`]. Both wrap an ordered
//! [`Record`] so unknown fields survive the round trip untouched.
//! Annotation turns question documents into [`Part`]s that carry the file
//! name and kind they will be exported under.

mod part;
mod question;
mod unit;

pub use part::{Meta, OutlineEntry, Part, PartKind, READING_FILENAME};
pub use question::{QuestionDocument, COUNT_KEY, QUESTIONS_KEY, TEXT_KEY};
pub use unit::{Unit, UnitSource, PREFACE_KEY, READING_KEY};

/// An ordered YAML mapping, as read from one document.
pub type Record = serde_yaml::Mapping;

//! Annotation of question documents with output file metadata.
//!
//! Each question document is paired with the operator's answer for its
//! position and turned into a [`Part`]. The file name is resolved by the
//! first rule that applies:
//!
//! 1. a non-empty operator answer, slugified;
//! 2. the `questions` prompt, slugified and truncated;
//! 3. a random token.
//!
//! An answer ending in `.md` selects [`PartKind::Markdown`]; everything else
//! is exported as [`PartKind::Data`] with a `.yml` extension.

mod slug;
mod token;

pub use slug::{slugify, slugify_truncated};
pub use token::random_token;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::model::{Meta, Part, PartKind, QuestionDocument, COUNT_KEY};
use crate::options::SplitOptions;
use crate::prompt::Answers;

/// Annotator turning question documents into exportable parts.
pub struct Annotator<R: Rng = ThreadRng> {
    rng: R,
    slug_len: usize,
    count_threshold: f64,
}

impl Annotator<ThreadRng> {
    /// Create an annotator using the thread-local random generator.
    pub fn new(options: &SplitOptions) -> Self {
        Self::with_rng(options, rand::rng())
    }
}

impl<R: Rng> Annotator<R> {
    /// Create an annotator with an explicit random source.
    pub fn with_rng(options: &SplitOptions, rng: R) -> Self {
        Self {
            rng,
            slug_len: options.slug_len,
            count_threshold: options.count_threshold,
        }
    }

    /// Annotate every document with its positional answer.
    pub fn annotate_all(&mut self, questions: &[QuestionDocument], answers: &Answers) -> Vec<Part> {
        questions
            .iter()
            .enumerate()
            .map(|(position, doc)| self.annotate(doc, answers.get(position)))
            .collect()
    }

    /// Annotate one document.
    ///
    /// The source document is left untouched; the returned part holds a copy
    /// of its fields with an over-threshold `count` moved into the metadata.
    pub fn annotate(&mut self, doc: &QuestionDocument, answer: &str) -> Part {
        let mut body = doc.fields.clone();

        let count = match doc.count() {
            Some(n) if n > self.count_threshold => body.shift_remove(COUNT_KEY),
            _ => None,
        };

        let (kind, stem) = self.resolve_name(doc, answer);
        let filename = format!("{}{}", stem, kind.extension());
        log::debug!("Question {} -> {}", doc.index, filename);

        Part::new(kind, Meta { count, filename }, body)
    }

    fn resolve_name(&mut self, doc: &QuestionDocument, answer: &str) -> (PartKind, String) {
        let answer = answer.trim();
        if !answer.is_empty() {
            let (kind, stem) = split_kind_suffix(answer);
            let slug = slugify(stem);
            if !slug.is_empty() {
                return (kind, slug);
            }
            log::warn!(
                "Answer {:?} for question {} has no usable characters",
                answer,
                doc.index
            );
        }

        if let Some(prompt) = doc.questions_text() {
            let slug = slugify_truncated(prompt, self.slug_len);
            if !slug.is_empty() {
                return (PartKind::Data, slug);
            }
        }

        (PartKind::Data, random_token(&mut self.rng))
    }
}

/// Split a recognised extension off an operator answer.
fn split_kind_suffix(answer: &str) -> (PartKind, &str) {
    let lower = answer.to_ascii_lowercase();
    if lower.ends_with(".md") {
        (PartKind::Markdown, &answer[..answer.len() - 3])
    } else if lower.ends_with(".yaml") {
        (PartKind::Data, &answer[..answer.len() - 5])
    } else if lower.ends_with(".yml") {
        (PartKind::Data, &answer[..answer.len() - 4])
    } else {
        (PartKind::Data, answer)
    }
}

//! Non-interactive namer.

use super::{Answers, Namer};
use crate::error::Result;
use crate::model::QuestionDocument;

/// Namer that answers from a fixed list without prompting.
#[derive(Debug, Clone, Default)]
pub struct PresetNamer {
    answers: Vec<String>,
}

impl PresetNamer {
    /// Use the given answers in order; missing positions are auto-named.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Auto-generate a name for every question.
    pub fn auto() -> Self {
        Self::default()
    }
}

impl Namer for PresetNamer {
    fn name_all(&mut self, questions: &[QuestionDocument]) -> Result<Answers> {
        if self.answers.len() > questions.len() {
            log::warn!(
                "{} preset answers for {} questions; extras are ignored",
                self.answers.len(),
                questions.len()
            );
        }
        let answers = (0..questions.len())
            .map(|i| self.answers.get(i).cloned().unwrap_or_default())
            .collect();
        Ok(Answers::new(answers))
    }
}

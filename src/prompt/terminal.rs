//! Line-based terminal namer.

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};

use super::{Answers, Namer};
use crate::error::{Error, Result};
use crate::model::QuestionDocument;

/// Frame drawn above and below each question preview.
pub const SEPARATOR: &str = "████████████";

const QUESTION_HEADER: &str = "This is how the question looks:";
const NAME_PROMPT: &str = "What should I name the file?";

/// Namer that shows each question and reads one line per answer.
///
/// End of input before every question is answered is treated as a
/// cancellation.
pub struct TerminalNamer<R, W> {
    input: R,
    output: W,
}

impl TerminalNamer<BufReader<Stdin>, Stderr> {
    /// Prompt on stderr and read answers from stdin.
    ///
    /// Stdout stays free for the command's own output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalNamer<R, W> {
    /// Create a namer over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the namer and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, doc: &QuestionDocument, total: usize) -> Result<String> {
        writeln!(self.output, "[{}/{}] {}", doc.index + 1, total, QUESTION_HEADER)?;
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "{}", doc.display_questions())?;
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output)?;
        write!(self.output, "{} ", NAME_PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }
        writeln!(self.output)?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Namer for TerminalNamer<R, W> {
    fn name_all(&mut self, questions: &[QuestionDocument]) -> Result<Answers> {
        let mut answers = Vec::with_capacity(questions.len());
        for doc in questions {
            answers.push(self.prompt(doc, questions.len())?);
        }
        Ok(Answers::new(answers))
    }
}

//! # unitsplit
//!
//! Split a multi-document YAML course unit into part files.
//!
//! A unit file is a YAML stream. The first document is the unit itself (a
//! `reading` passage plus summary fields); every following document is a
//! question. The library reads the stream, asks a [`Namer`] for one file name
//! per question, and writes a directory containing `reading.md`, one file per
//! question, and a `_unit.yml` summary whose `outline` references them in
//! order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unitsplit::{PresetNamer, UnitSplit};
//!
//! fn main() -> unitsplit::Result<()> {
//!     let plan = UnitSplit::new()
//!         .with_base_dir("build")
//!         .plan("fractions.yml", &mut PresetNamer::auto())?;
//!
//!     let report = plan.write()?;
//!     println!("{} files in {}", report.file_count(), report.output_dir.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Work happens in two strictly ordered phases:
//!
//! 1. [`UnitSplit::plan`] reads the input, checks that the output directory
//!    is free, collects every answer, and annotates the questions. Nothing
//!    is written.
//! 2. [`SplitPlan::write`] creates the directory and writes the files.
//!
//! A cancelled prompt therefore never leaves a partial directory behind.

pub mod annotate;
pub mod error;
pub mod export;
pub mod model;
pub mod options;
pub mod parser;
pub mod prompt;

// Re-export commonly used types
pub use annotate::{slugify, Annotator};
pub use error::{Error, Result};
pub use export::{ExportReport, Exporter, WrittenFile, UNIT_FILENAME};
pub use model::{Meta, OutlineEntry, Part, PartKind, QuestionDocument, Record, Unit, UnitSource};
pub use options::SplitOptions;
pub use parser::UnitReader;
pub use prompt::{Answers, Namer, PresetNamer, TerminalNamer};

use std::path::{Path, PathBuf};

/// Read and partition a unit file.
///
/// # Example
///
/// ```no_run
/// let source = unitsplit::read_file("fractions.yml").unwrap();
/// println!("Questions: {}", source.question_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<UnitSource> {
    UnitReader::open(path)?.read()
}

/// Split a unit file next to itself with default options.
///
/// # Example
///
/// ```no_run
/// use unitsplit::{split_file, TerminalNamer};
///
/// let report = split_file("fractions.yml", &mut TerminalNamer::stdio()).unwrap();
/// assert!(report.file_count() >= 2);
/// ```
pub fn split_file<P: AsRef<Path>>(path: P, namer: &mut dyn Namer) -> Result<ExportReport> {
    UnitSplit::new().plan(path, namer)?.write()
}

/// Builder for splitting unit files.
///
/// # Example
///
/// ```no_run
/// use unitsplit::{PresetNamer, UnitSplit};
///
/// let report = UnitSplit::new()
///     .with_base_dir("out")
///     .with_slug_len(32)
///     .plan("fractions.yml", &mut PresetNamer::new(["intro-drill", ""]))?
///     .write()?;
/// # Ok::<(), unitsplit::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitSplit {
    options: SplitOptions,
}

impl UnitSplit {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from existing options.
    pub fn with_options(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Set the directory input paths and output directories resolve against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_base_dir(dir);
        self
    }

    /// Set the maximum length of prompt-derived file names.
    pub fn with_slug_len(mut self, len: usize) -> Self {
        self.options = self.options.with_slug_len(len);
        self
    }

    /// Set the `count` threshold.
    pub fn with_count_threshold(mut self, threshold: f64) -> Self {
        self.options = self.options.with_count_threshold(threshold);
        self
    }

    /// Current options.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Output directory that [`plan`](Self::plan) would use for `input`.
    pub fn output_dir_for<P: AsRef<Path>>(&self, input: P) -> PathBuf {
        export::output_dir_for(&self.options.base_dir, input.as_ref())
    }

    /// Location `input` is read from.
    pub fn input_path_for<P: AsRef<Path>>(&self, input: P) -> PathBuf {
        self.options.base_dir.join(input)
    }

    /// Read `input`, collect names, and annotate. Nothing is written.
    ///
    /// `input` is resolved against the base directory, and the output
    /// directory is `input` without its extension under the same base.
    pub fn plan<P: AsRef<Path>>(&self, input: P, namer: &mut dyn Namer) -> Result<SplitPlan> {
        let input = input.as_ref();
        let source = read_file(self.input_path_for(input))?;
        self.plan_source(source, self.output_dir_for(input), namer)
    }

    /// Plan an already-parsed unit into `output_dir`.
    pub fn plan_source(
        &self,
        source: UnitSource,
        output_dir: impl Into<PathBuf>,
        namer: &mut dyn Namer,
    ) -> Result<SplitPlan> {
        let exporter = Exporter::new(output_dir);
        exporter.check_available()?;

        let answers = namer.name_all(&source.questions)?;
        let questions = Annotator::new(&self.options).annotate_all(&source.questions, &answers);
        let (reading, summary) = export::build_summary(source.unit, &questions)?;

        let mut parts = Vec::with_capacity(questions.len() + 1);
        parts.push(reading);
        parts.extend(questions);

        Ok(SplitPlan {
            exporter,
            summary,
            parts,
        })
    }
}

/// A fully annotated unit, ready to be written.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    exporter: Exporter,
    summary: Record,
    parts: Vec<Part>,
}

impl SplitPlan {
    /// Directory the plan writes into.
    pub fn output_dir(&self) -> &Path {
        self.exporter.output_dir()
    }

    /// Parts in write order; the reading comes first.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The unit summary record, including `outline`.
    pub fn summary(&self) -> &Record {
        &self.summary
    }

    /// Outline entries in order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.parts.iter().map(Part::outline_entry).collect()
    }

    /// Number of files [`write`](Self::write) produces.
    pub fn file_count(&self) -> usize {
        self.parts.len() + 1
    }

    /// Create the output directory and write every file.
    pub fn write(self) -> Result<ExportReport> {
        self.write_with_progress(|_| {})
    }

    /// Like [`write`](Self::write), calling `progress` after each file.
    ///
    /// Files are written in order: `_unit.yml`, `reading.md`, then the
    /// questions.
    pub fn write_with_progress<F>(self, mut progress: F) -> Result<ExportReport>
    where
        F: FnMut(&WrittenFile),
    {
        self.exporter.create_output_dir()?;
        let mut report = ExportReport::new(self.exporter.output_dir());

        let written = self.exporter.export_unit(&self.summary)?;
        progress(&written);
        report.files.push(written);

        for part in &self.parts {
            let written = self.exporter.export_part(part)?;
            progress(&written);
            report.files.push(written);
        }

        log::info!(
            "Wrote {} files ({} bytes) to {}",
            report.file_count(),
            report.total_bytes(),
            report.output_dir.display()
        );
        Ok(report)
    }
}

//! Integration tests for the read → name → annotate → export pipeline.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde_yaml::Value;
use tempfile::TempDir;
use unitsplit::{
    split_file, Error, OutlineEntry, PartKind, PresetNamer, Record, TerminalNamer, UnitSplit,
};

const SCENARIO: &str = "\
reading: Intro text
preface: skip me
---
questions: What is 2+2?
text: Discussion
";

/// Write `content` as `name` inside a fresh temp dir.
fn setup(name: &str, content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(name), content).unwrap();
    dir
}

fn read_yaml(path: &Path) -> Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_scenario_reading_and_single_question() {
    let dir = setup("unit1.yml", SCENARIO);
    let report = split_file_in(&dir, "unit1.yml", &mut PresetNamer::new([""]));

    let out = dir.path().join("unit1");
    assert_eq!(report.output_dir, out);
    assert_eq!(
        file_names(&out),
        vec!["_unit.yml", "reading.md", "what-is-2-2.yml"]
    );

    assert_eq!(
        fs::read_to_string(out.join("reading.md")).unwrap(),
        "Intro text"
    );

    let question: Value = serde_yaml::from_str("questions: What is 2+2?\ntext: Discussion\n").unwrap();
    assert_eq!(read_yaml(&out.join("what-is-2-2.yml")), question);

    let unit = read_yaml(&out.join("_unit.yml"));
    let expected: Value = serde_yaml::from_str("outline: [reading.md, what-is-2-2.yml]\n").unwrap();
    assert_eq!(unit, expected);
}

#[test]
fn test_unit_fields_preserved_in_order() {
    let input = "\
title: Fractions
reading: Halves and quarters
level: 3
preface: hidden
tags: [math, grade-3]
";
    let dir = setup("fractions.yml", input);
    split_file_in(&dir, "fractions.yml", &mut PresetNamer::auto());

    let text = fs::read_to_string(dir.path().join("fractions/_unit.yml")).unwrap();
    let summary: Record = serde_yaml::from_str(&text).unwrap();
    let keys: Vec<_> = summary.keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, vec!["title", "level", "tags", "outline"]);
    assert!(!text.contains("preface"));
    assert!(!text.contains("Halves"));
}

#[test]
fn test_count_over_threshold_moves_to_outline() {
    let input = "\
reading: R
---
questions: Drill sums
count: 5
---
questions: Easy one
count: 2
";
    let dir = setup("drills.yml", input);
    split_file_in(&dir, "drills.yml", &mut PresetNamer::auto());
    let out = dir.path().join("drills");

    let drill = read_yaml(&out.join("drill-sums.yml"));
    assert!(drill.get("count").is_none());

    let easy = read_yaml(&out.join("easy-one.yml"));
    assert_eq!(easy.get("count"), Some(&Value::from(2)));

    let unit = read_yaml(&out.join("_unit.yml"));
    let outline: Vec<OutlineEntry> =
        serde_yaml::from_value(unit.get("outline").cloned().unwrap()).unwrap();
    assert_eq!(outline.len(), 3);
    assert_eq!(outline[1].filename(), "drill-sums.yml");
    match &outline[1] {
        OutlineEntry::Detailed(meta) => assert_eq!(meta.count, Some(Value::from(5))),
        other => panic!("expected detailed entry, got {:?}", other),
    }
    assert_eq!(outline[2], OutlineEntry::File("easy-one.yml".into()));
}

#[test]
fn test_markdown_answer_writes_text() {
    let input = "\
reading: R
---
questions: Reflect on the reading
text: |
  ## Reflection

  Write a paragraph.
";
    let dir = setup("unit.yml", input);
    let report = split_file_in(&dir, "unit.yml", &mut PresetNamer::new(["Reflection.md"]));

    assert_eq!(report.count_kind(PartKind::Markdown), 2);
    let body = fs::read_to_string(dir.path().join("unit/reflection.md")).unwrap();
    assert_eq!(body, "## Reflection\n\nWrite a paragraph.\n");
}

#[test]
fn test_random_names_for_structured_questions() {
    let input = "\
reading: R
---
questions:
  - prompt: First
  - prompt: Second
";
    let dir = setup("unit.yml", input);
    let report = split_file_in(&dir, "unit.yml", &mut PresetNamer::auto());

    let name = &report.files[2].filename;
    let stem = name.strip_suffix(".yml").unwrap();
    assert!((5..=6).contains(&stem.len()), "unexpected name {}", name);
    assert!(dir.path().join("unit").join(name).exists());
}

#[test]
fn test_terminal_answers_flow_through() {
    let input = "\
reading: R
---
questions: One
---
questions: Two
";
    let dir = setup("unit.yml", input);
    let mut namer = TerminalNamer::new(Cursor::new("first pick\n\n"), Vec::new());
    split_file_in(&dir, "unit.yml", &mut namer);

    assert_eq!(
        file_names(&dir.path().join("unit")),
        vec!["_unit.yml", "first-pick.yml", "reading.md", "two.yml"]
    );
}

#[test]
fn test_cancelled_prompt_writes_nothing() {
    let dir = setup("unit.yml", SCENARIO);
    let mut namer = TerminalNamer::new(Cursor::new(""), Vec::new());

    let result = UnitSplit::new()
        .with_base_dir(dir.path())
        .plan("unit.yml", &mut namer);

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(!dir.path().join("unit").exists());
}

#[test]
fn test_existing_output_dir_fails() {
    let dir = setup("unit.yml", SCENARIO);
    fs::create_dir(dir.path().join("unit")).unwrap();

    let result = UnitSplit::new().plan(dir.path().join("unit.yml"), &mut PresetNamer::auto());
    assert!(matches!(result, Err(Error::OutputExists(_))));
}

#[test]
fn test_empty_input_fails() {
    let dir = setup("empty.yml", "");
    let result = UnitSplit::new().plan(dir.path().join("empty.yml"), &mut PresetNamer::auto());
    assert!(matches!(result, Err(Error::EmptyInput)));
    assert!(!dir.path().join("empty").exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = split_file(dir.path().join("nope.yml"), &mut PresetNamer::auto());
    assert!(matches!(result, Err(Error::Read { .. })));
}

#[test]
fn test_file_count_matches_documents() {
    let mut input = String::from("reading: R\n");
    for i in 0..6 {
        input.push_str(&format!("---\nquestions: Question number {}\n", i));
    }
    let dir = setup("many.yml", &input);
    let report = split_file_in(&dir, "many.yml", &mut PresetNamer::auto());

    // 6 questions + reading.md + _unit.yml
    assert_eq!(report.file_count(), 8);
    assert_eq!(file_names(&dir.path().join("many")).len(), 8);
}

/// Split `name` inside `dir`, writing the output directory next to it.
fn split_file_in(
    dir: &TempDir,
    name: &str,
    namer: &mut dyn unitsplit::Namer,
) -> unitsplit::ExportReport {
    UnitSplit::new()
        .with_base_dir(dir.path())
        .plan(name, namer)
        .unwrap()
        .write()
        .unwrap()
}

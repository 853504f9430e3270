use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use annsplit::{AnnotationDocument, SplitConfig, SplitError, run_split};

struct Fixture {
    _temp: tempfile::TempDir,
    input: PathBuf,
    train: PathBuf,
    test: PathBuf,
    valid: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("annotations.json");
        let train = temp.path().join("train.json");
        let test = temp.path().join("test.json");
        let valid = temp.path().join("valid.json");
        Self {
            _temp: temp,
            input,
            train,
            test,
            valid,
        }
    }

    fn write_manifest(&self, manifest: &Value) {
        fs::write(&self.input, serde_json::to_vec_pretty(manifest).unwrap()).unwrap();
    }

    fn config(&self) -> SplitConfig {
        SplitConfig::new(&self.input, &self.train, &self.test, &self.valid)
    }

    fn assert_no_outputs(&self) {
        assert!(!self.train.exists());
        assert!(!self.test.exists());
        assert!(!self.valid.exists());
    }
}

fn corpus_manifest(matching: usize, other: usize) -> Value {
    let mut records = Vec::new();
    for idx in 0..matching {
        records.push(json!({
            "path": format!("/LibriSpeech/train-clean-100/{idx:04}.flac"),
            "text": format!("matching {idx}"),
            "task": "asr"
        }));
    }
    for idx in 0..other {
        records.push(json!({
            "path": format!("/OtherData/file_{idx:04}.flac"),
            "text": format!("other {idx}")
        }));
    }
    json!({ "annotation": records })
}

fn read_split(path: &Path) -> AnnotationDocument {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn end_to_end_partitions_rewrites_and_persists() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(50, 50));

    let summary = run_split(&fixture.config().with_prepend_path("/data/raw")).unwrap();
    assert_eq!(summary.train, 40);
    assert_eq!(summary.test, 5);
    assert_eq!(summary.valid, 5);
    assert_eq!(summary.total(), 50);

    let train = read_split(&fixture.train);
    let test = read_split(&fixture.test);
    let valid = read_split(&fixture.valid);
    assert_eq!(train.annotation.len(), 40);
    assert_eq!(test.annotation.len(), 5);
    assert_eq!(valid.annotation.len(), 5);

    let mut union: HashSet<String> = HashSet::new();
    for record in train
        .annotation
        .iter()
        .chain(&test.annotation)
        .chain(&valid.annotation)
    {
        assert!(record.path().starts_with("/data/raw/LibriSpeech"));
        assert_eq!(record.field("task"), Some(&json!("asr")));
        assert!(union.insert(record.path().to_string()));
    }
    assert_eq!(union.len(), 50);
}

#[test]
fn rerunning_with_the_same_seed_is_byte_identical() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(30, 10));
    let config = fixture.config().with_prepend_path("/data");

    run_split(&config).unwrap();
    let first = [
        fs::read(&fixture.train).unwrap(),
        fs::read(&fixture.test).unwrap(),
        fs::read(&fixture.valid).unwrap(),
    ];

    run_split(&config).unwrap();
    let second = [
        fs::read(&fixture.train).unwrap(),
        fs::read(&fixture.test).unwrap(),
        fs::read(&fixture.valid).unwrap(),
    ];
    assert_eq!(first, second);
}

#[test]
fn changing_the_seed_changes_the_partition_but_not_the_union() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(40, 0));

    run_split(&fixture.config().with_random_state(1)).unwrap();
    let first_train: HashSet<String> = read_split(&fixture.train)
        .annotation
        .iter()
        .map(|r| r.path().to_string())
        .collect();

    run_split(&fixture.config().with_random_state(2)).unwrap();
    let second_train: HashSet<String> = read_split(&fixture.train)
        .annotation
        .iter()
        .map(|r| r.path().to_string())
        .collect();

    assert_eq!(first_train.len(), 32);
    assert_eq!(second_train.len(), 32);
    assert_ne!(first_train, second_train);
}

#[test]
fn missing_input_halts_without_creating_outputs() {
    let fixture = Fixture::new();
    let result = run_split(&fixture.config());
    assert!(matches!(result, Err(SplitError::FileNotFound { .. })));
    fixture.assert_no_outputs();
}

#[test]
fn malformed_input_halts_without_creating_outputs() {
    let fixture = Fixture::new();
    fs::write(&fixture.input, b"{\"annotation\": [oops").unwrap();
    let result = run_split(&fixture.config());
    assert!(matches!(result, Err(SplitError::MalformedInput { .. })));
    fixture.assert_no_outputs();
}

#[test]
fn missing_or_empty_annotation_key_halts_without_outputs() {
    let fixture = Fixture::new();
    fixture.write_manifest(&json!({ "annotation": [] }));
    assert!(matches!(
        run_split(&fixture.config()),
        Err(SplitError::MissingKey)
    ));
    fixture.assert_no_outputs();

    fixture.write_manifest(&json!({ "metadata": "only" }));
    assert!(matches!(
        run_split(&fixture.config()),
        Err(SplitError::MissingKey)
    ));
    fixture.assert_no_outputs();
}

#[test]
fn empty_filter_result_halts_without_outputs() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(0, 25));
    assert!(matches!(
        run_split(&fixture.config()),
        Err(SplitError::EmptyAfterFilter)
    ));
    fixture.assert_no_outputs();
}

#[test]
fn invalid_train_size_halts_without_outputs() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(10, 0));
    assert!(matches!(
        run_split(&fixture.config().with_train_size(1.0)),
        Err(SplitError::Configuration(_))
    ));
    fixture.assert_no_outputs();
}

#[test]
fn outputs_are_indented_with_four_spaces() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(10, 0));
    run_split(&fixture.config()).unwrap();

    let raw = fs::read_to_string(&fixture.train).unwrap();
    assert!(raw.starts_with("{\n    \"annotation\": [\n        {\n"));
    assert!(raw.contains("            \"path\": \""));
}

#[test]
fn single_survivor_manifest_degenerates_to_one_populated_split() {
    let fixture = Fixture::new();
    fixture.write_manifest(&json!({
        "annotation": [
            {"path": "/LibriSpeech/a.flac", "text": "x"},
            {"path": "/Other/b.flac", "text": "y"}
        ]
    }));

    let summary = run_split(&fixture.config().with_prepend_path("/root")).unwrap();
    assert_eq!((summary.train, summary.test, summary.valid), (0, 1, 0));

    let test = read_split(&fixture.test);
    assert_eq!(test.annotation[0].path(), "/root/LibriSpeech/a.flac");
    assert_eq!(test.annotation[0].field("text"), Some(&json!("x")));
    assert!(read_split(&fixture.train).annotation.is_empty());
    assert!(read_split(&fixture.valid).annotation.is_empty());
}

#[test]
fn stale_outputs_are_overwritten_wholesale() {
    let fixture = Fixture::new();
    fixture.write_manifest(&corpus_manifest(10, 0));
    fs::write(&fixture.train, b"{\"annotation\": [\"stale\"]}").unwrap();

    run_split(&fixture.config()).unwrap();
    let train = read_split(&fixture.train);
    assert_eq!(train.annotation.len(), 8);
    assert!(train.annotation.iter().all(|r| !r.path().is_empty()));
}

//! Fabricates a small annotation manifest and runs the split pipeline on it.
//!
//! Writes `annotations.json` plus the three split manifests into a temp
//! directory, so repeated runs never leave files behind.

use std::error::Error;
use std::fs;

use serde_json::json;

use annsplit::{SplitConfig, run_split};

fn main() -> Result<(), Box<dyn Error>> {
    let temp = tempfile::tempdir()?;
    let input = temp.path().join("annotations.json");

    // 100 records: half match the /LibriSpeech prefix, half get filtered out.
    let mut records = Vec::new();
    for idx in 0..50 {
        records.push(json!({
            "path": format!("/LibriSpeech/train-clean-100/103/1240/103-1240-{idx:04}.flac"),
            "text": "This path starts correctly.",
            "task": "asr"
        }));
        records.push(json!({
            "path": format!("/OtherData/some_file_{idx}.flac"),
            "text": "This path should be filtered out.",
            "task": "asr"
        }));
    }
    fs::write(
        &input,
        serde_json::to_vec_pretty(&json!({ "annotation": records }))?,
    )?;

    let config = SplitConfig::new(
        &input,
        temp.path().join("train.json"),
        temp.path().join("test.json"),
        temp.path().join("valid.json"),
    )
    .with_prepend_path("/data/raw");

    let summary = run_split(&config)?;
    println!(
        "Successfully filtered, modified, and split the data into {} training samples, \
         {} testing samples, and {} validation samples.",
        summary.train, summary.test, summary.valid
    );

    let train_raw = fs::read_to_string(temp.path().join("train.json"))?;
    println!(
        "train.json preview:\n{}",
        train_raw.lines().take(10).collect::<Vec<_>>().join("\n")
    );
    Ok(())
}

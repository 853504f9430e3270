//! CLI runner for the annotation split pipeline.
//!
//! ```text
//! cargo run --example split_json_cli -- annotations.json train.json test.json valid.json \
//!     --filter-prefix /LibriSpeech --prepend-path /data/raw --train-size 0.8
//! ```

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    annsplit::example_apps::run_split_json_app()
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::config::SplitConfig;
use crate::constants::defaults::{
    DEFAULT_FILTER_PREFIX, DEFAULT_PREPEND_PATH, DEFAULT_RANDOM_STATE, DEFAULT_TRAIN_SIZE,
};
use crate::errors::SplitError;
use crate::pipeline::run_split;

#[derive(Debug, Parser)]
#[command(
    name = "split_json_cli",
    disable_help_subcommand = true,
    about = "Filter, rewrite, and split a JSON annotation manifest",
    long_about = "Filter annotation records by path prefix, prepend a path fragment to the \
                  survivors, and partition them into train/test/valid JSON manifests with a \
                  seeded random split.",
    after_help = "Identical input, prefix, fraction, and seed reproduce identical output files."
)]
struct SplitJsonCli {
    #[arg(value_name = "INPUT", help = "Input annotation manifest (JSON)")]
    input_json_path: PathBuf,
    #[arg(value_name = "TRAIN_OUT", help = "Destination for the train manifest")]
    train_output_path: PathBuf,
    #[arg(value_name = "TEST_OUT", help = "Destination for the test manifest")]
    test_output_path: PathBuf,
    #[arg(value_name = "VALID_OUT", help = "Destination for the validation manifest")]
    valid_output_path: PathBuf,
    #[arg(
        long = "filter-prefix",
        default_value = DEFAULT_FILTER_PREFIX,
        help = "Required starting string for record paths"
    )]
    filter_prefix: String,
    #[arg(
        long = "prepend-path",
        default_value = DEFAULT_PREPEND_PATH,
        help = "String prepended to retained record paths"
    )]
    prepend_path: String,
    #[arg(
        long = "train-size",
        default_value_t = DEFAULT_TRAIN_SIZE,
        value_parser = parse_train_size,
        help = "Fraction of filtered records assigned to train (0 and 1 exclusive)"
    )]
    train_size: f64,
    #[arg(
        long = "random-state",
        default_value_t = DEFAULT_RANDOM_STATE,
        help = "Seed driving the deterministic split"
    )]
    random_state: u64,
}

fn parse_train_size(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(format!(
            "train size must be between 0 and 1 exclusive, got {value}"
        ))
    }
}

/// Parse CLI args and run the split pipeline.
///
/// Expected data failures (missing file, bad JSON, missing key, empty filter
/// result) print their diagnostic and exit cleanly; library callers who need
/// a non-zero exit use [`run_split`] directly. Unexpected I/O failures still
/// bubble as errors.
pub fn run_split_json_app() -> Result<(), Box<dyn Error>> {
    let cli = SplitJsonCli::parse();
    let config = SplitConfig::new(
        cli.input_json_path,
        cli.train_output_path,
        cli.test_output_path,
        cli.valid_output_path,
    )
    .with_filter_prefix(cli.filter_prefix)
    .with_prepend_path(cli.prepend_path)
    .with_train_size(cli.train_size)
    .with_random_state(cli.random_state);

    match run_split(&config) {
        Ok(summary) => {
            println!(
                "Successfully filtered, modified, and split the data into {} training samples, \
                 {} testing samples, and {} validation samples.",
                summary.train, summary.test, summary.valid
            );
            Ok(())
        }
        Err(
            err @ (SplitError::FileNotFound { .. }
            | SplitError::MalformedInput { .. }
            | SplitError::MissingKey
            | SplitError::EmptyAfterFilter),
        ) => {
            println!("Error: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

use tracing::info;

use crate::config::SplitConfig;
use crate::errors::SplitError;
use crate::filter::filter_and_prepend;
use crate::loader::load_document;
use crate::splitter::split;
use crate::writer::write_document;

/// Per-split record counts reported after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSummary {
    /// Records written to the train manifest.
    pub train: usize,
    /// Records written to the test manifest.
    pub test: usize,
    /// Records written to the validation manifest.
    pub valid: usize,
}

impl SplitSummary {
    /// Total records written across all three manifests.
    pub fn total(&self) -> usize {
        self.train + self.test + self.valid
    }
}

/// Run the full pipeline: load, filter/rewrite, split, and persist.
///
/// Halts at the first failure. No output file is touched before the split
/// succeeds, so load, key, and filter failures leave the filesystem as-is.
pub fn run_split(config: &SplitConfig) -> Result<SplitSummary, SplitError> {
    config.validate()?;

    let document = load_document(&config.input_json_path)?;
    let annotations = document.into_annotations()?;

    let filtered = filter_and_prepend(annotations, &config.filter_prefix, &config.prepend_path);
    if filtered.is_empty() {
        return Err(SplitError::EmptyAfterFilter);
    }

    let outcome = split(filtered, config.train_size, config.random_state)?;
    let summary = SplitSummary {
        train: outcome.train.len(),
        test: outcome.test.len(),
        valid: outcome.valid.len(),
    };

    write_document(&outcome.train, &config.train_output_path)?;
    write_document(&outcome.test, &config.test_output_path)?;
    write_document(&outcome.valid, &config.valid_output_path)?;

    info!(
        train = summary.train,
        test = summary.test,
        valid = summary.valid,
        input = %config.input_json_path.display(),
        "split annotation manifests written"
    );
    Ok(summary)
}

use std::path::PathBuf;

use crate::constants::defaults::{
    DEFAULT_FILTER_PREFIX, DEFAULT_PREPEND_PATH, DEFAULT_RANDOM_STATE, DEFAULT_TRAIN_SIZE,
};
use crate::errors::SplitError;
use crate::types::{AnnotationPath, PathPrefix};

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
pub struct SplitConfig {
    /// Input annotation manifest (JSON).
    pub input_json_path: PathBuf,
    /// Destination for the train manifest.
    pub train_output_path: PathBuf,
    /// Destination for the test manifest.
    pub test_output_path: PathBuf,
    /// Destination for the validation manifest.
    pub valid_output_path: PathBuf,
    /// Required starting string for a record's `path` value.
    pub filter_prefix: PathPrefix,
    /// String prepended to each retained record's `path` value.
    pub prepend_path: AnnotationPath,
    /// Fraction of filtered records assigned to train, in (0, 1) exclusive.
    pub train_size: f64,
    /// RNG seed that makes both shuffle stages reproducible.
    pub random_state: u64,
}

impl SplitConfig {
    /// Create a configuration for the four required paths, with defaults for
    /// everything else.
    pub fn new(
        input_json_path: impl Into<PathBuf>,
        train_output_path: impl Into<PathBuf>,
        test_output_path: impl Into<PathBuf>,
        valid_output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_json_path: input_json_path.into(),
            train_output_path: train_output_path.into(),
            test_output_path: test_output_path.into(),
            valid_output_path: valid_output_path.into(),
            filter_prefix: DEFAULT_FILTER_PREFIX.to_string(),
            prepend_path: DEFAULT_PREPEND_PATH.to_string(),
            train_size: DEFAULT_TRAIN_SIZE,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }

    /// Override the required path prefix.
    pub fn with_filter_prefix(mut self, filter_prefix: impl Into<PathPrefix>) -> Self {
        self.filter_prefix = filter_prefix.into();
        self
    }

    /// Override the string prepended to retained record paths.
    pub fn with_prepend_path(mut self, prepend_path: impl Into<AnnotationPath>) -> Self {
        self.prepend_path = prepend_path.into();
        self
    }

    /// Override the train fraction.
    pub fn with_train_size(mut self, train_size: f64) -> Self {
        self.train_size = train_size;
        self
    }

    /// Override the split seed.
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Validate that `train_size` lies strictly between 0 and 1.
    pub fn validate(&self) -> Result<(), SplitError> {
        if !(self.train_size > 0.0 && self.train_size < 1.0) {
            return Err(SplitError::Configuration(format!(
                "train_size must be between 0 and 1 exclusive, got {}",
                self.train_size
            )));
        }
        Ok(())
    }
}

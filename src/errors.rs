use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for manifest loading, filtering, splitting, and persistence failures.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input manifest path does not exist.
    #[error("the file '{path}' was not found")]
    FileNotFound {
        /// Path that was probed.
        path: PathBuf,
    },
    /// The input manifest is not valid JSON.
    #[error("could not decode JSON from the file '{path}': {source}")]
    MalformedInput {
        /// Path of the unparseable file.
        path: PathBuf,
        /// Underlying decode failure.
        source: serde_json::Error,
    },
    /// The `annotation` key is absent or holds an empty list.
    #[error("no 'annotation' key found in the JSON file or it is empty")]
    MissingKey,
    /// The prefix filter removed every record.
    #[error("no annotations remaining after filtering; no output files will be created")]
    EmptyAfterFilter,
    /// A configuration parameter is out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Filesystem failure while reading or writing a manifest.
    #[error(transparent)]
    Io(#[from] io::Error),
}

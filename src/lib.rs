#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Pipeline configuration types.
pub mod config;
/// Centralized constants for configuration defaults and document keys.
pub mod constants;
/// Annotation record and manifest document types.
pub mod document;
/// Reusable example runners shared by the demo binaries.
pub mod example_apps;
/// Prefix filtering and path rewriting.
pub mod filter;
/// Manifest loading.
pub mod loader;
/// End-to-end pipeline orchestration.
pub mod pipeline;
/// Seeded two-stage random partitioning.
pub mod splitter;
/// Shared type aliases.
pub mod types;
/// Split output serialization.
pub mod writer;

mod errors;

pub use config::SplitConfig;
pub use document::{AnnotationDocument, AnnotationRecord};
pub use errors::SplitError;
pub use filter::filter_and_prepend;
pub use loader::load_document;
pub use pipeline::{SplitSummary, run_split};
pub use splitter::{SplitOutcome, split};
pub use types::{AnnotationPath, FieldName, PathPrefix};
pub use writer::write_document;

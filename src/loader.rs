use std::fs;
use std::path::Path;

use crate::document::AnnotationDocument;
use crate::errors::SplitError;

/// Read and parse an annotation manifest.
///
/// Fails with [`SplitError::FileNotFound`] when the path does not exist and
/// with [`SplitError::MalformedInput`] when the content is not valid JSON.
/// Other filesystem failures surface as [`SplitError::Io`].
pub fn load_document(path: impl AsRef<Path>) -> Result<AnnotationDocument, SplitError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SplitError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| SplitError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

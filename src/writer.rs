use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::constants::document::JSON_INDENT;
use crate::document::AnnotationRecord;
use crate::errors::SplitError;

/// Borrowed manifest view so writing a subset never clones its records.
#[derive(Serialize)]
struct DocumentView<'a> {
    annotation: &'a [AnnotationRecord],
}

/// Serialize `{"annotation": records}` as 4-space-indented JSON to `path`.
///
/// Overwrites any existing file wholesale. There is no temp-file-and-rename
/// step, so an interrupted write can leave a truncated file.
pub fn write_document(
    records: &[AnnotationRecord],
    path: impl AsRef<Path>,
) -> Result<(), SplitError> {
    let view = DocumentView {
        annotation: records,
    };
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    view.serialize(&mut serializer).map_err(io::Error::from)?;
    fs::write(path, buffer)?;
    Ok(())
}

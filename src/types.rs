/// Path value stored under a record's `path` field.
/// Example: `/LibriSpeech/train-clean-100/103/1240/103-1240-0000.flac`
pub type AnnotationPath = String;
/// Field name inside an annotation record.
/// Examples: `path`, `text`, `task`
pub type FieldName = String;
/// Prefix a record's `path` must start with to survive filtering.
/// Example: `/LibriSpeech`
pub type PathPrefix = String;

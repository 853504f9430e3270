use crate::document::AnnotationRecord;

/// Keep records whose `path` starts with `prefix`, then prepend `prepend` to
/// each retained path.
///
/// Retained records keep their original relative order. The rewrite is plain
/// string concatenation: no separator insertion, no normalization. Records
/// without a `path` field read as the empty string and only survive when
/// `prefix` is itself empty.
pub fn filter_and_prepend(
    records: Vec<AnnotationRecord>,
    prefix: &str,
    prepend: &str,
) -> Vec<AnnotationRecord> {
    let mut retained: Vec<AnnotationRecord> = records
        .into_iter()
        .filter(|record| record.path().starts_with(prefix))
        .collect();
    for record in &mut retained {
        let rewritten = format!("{prepend}{}", record.path());
        record.set_path(rewritten);
    }
    retained
}

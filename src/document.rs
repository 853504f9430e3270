use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::document::PATH_FIELD;
use crate::errors::SplitError;
use crate::types::{AnnotationPath, FieldName};

/// One annotation record: an ordered field map keyed at minimum by `path`.
///
/// Only `path` is ever inspected or rewritten. Every other field passes
/// through the pipeline opaquely and in its original order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRecord {
    fields: IndexMap<FieldName, Value>,
}

impl AnnotationRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record path, or the empty string when the field is absent or not text.
    pub fn path(&self) -> &str {
        self.fields
            .get(PATH_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Replace the record's `path` value, keeping its slot in the field order.
    pub fn set_path(&mut self, path: impl Into<AnnotationPath>) {
        self.fields
            .insert(PATH_FIELD.to_string(), Value::String(path.into()));
    }

    /// Set an arbitrary field, returning the record for chaining.
    pub fn with_field(mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read an arbitrary field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Borrow the full ordered field map.
    pub fn fields(&self) -> &IndexMap<FieldName, Value> {
        &self.fields
    }
}

/// Top-level manifest shape: `{"annotation": [record, ...]}`.
///
/// Unknown top-level keys are ignored on read and never written back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    /// Ordered record list held under the `annotation` key.
    #[serde(default)]
    pub annotation: Vec<AnnotationRecord>,
}

impl AnnotationDocument {
    /// Wrap a record list in the manifest shape.
    pub fn new(annotation: Vec<AnnotationRecord>) -> Self {
        Self { annotation }
    }

    /// Take the record list, failing when the key was absent or the list empty.
    pub fn into_annotations(self) -> Result<Vec<AnnotationRecord>, SplitError> {
        if self.annotation.is_empty() {
            return Err(SplitError::MissingKey);
        }
        Ok(self.annotation)
    }
}

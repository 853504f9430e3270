/// Constants used by configuration defaults.
pub mod defaults {
    /// Default required starting string for a record's `path` value.
    pub const DEFAULT_FILTER_PREFIX: &str = "/LibriSpeech";
    /// Default string prepended to retained record paths (no rewrite).
    pub const DEFAULT_PREPEND_PATH: &str = "";
    /// Default fraction of filtered records assigned to train.
    pub const DEFAULT_TRAIN_SIZE: f64 = 0.8;
    /// Default seed driving both shuffle stages.
    pub const DEFAULT_RANDOM_STATE: u64 = 42;
}

/// Constants used by the annotation document layout.
pub mod document {
    /// Single recognized top-level key holding the record list.
    pub const ANNOTATION_KEY: &str = "annotation";
    /// Record field inspected by the prefix filter and path rewrite.
    pub const PATH_FIELD: &str = "path";
    /// Indentation unit used when serializing output manifests.
    pub const JSON_INDENT: &[u8] = b"    ";
}

//! Training script bundle

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

/// Files and folders skipped when the source directory is uploaded
pub const DEFAULT_IGNORE_PATTERNS: [&str; 6] = [
    ".env",
    ".git",
    "__pycache__",
    ".DS_Store",
    ".cache",
    ".ipynb_checkpoints",
];

pub static SOURCE_CODE_SCHEMA: Schema = Schema {
    name: "SourceCode",
    fields: &[
        Field::optional("source_dir", FieldType::String),
        Field::optional("requirements", FieldType::String),
        Field::optional("entry_script", FieldType::String),
        Field::optional("command", FieldType::String),
        Field::optional("ignore_patterns", FieldType::List(&FieldType::String)),
    ],
};

/// Source code location, dependencies and what to run in the container
///
/// Either `entry_script` or `command` is expected to be set. Both being set
/// is accepted here; the job builder decides which one runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SourceCode {
    /// Local directory, S3 URI, or path to a tar.gz (local or in S3)
    pub source_dir: Option<String>,

    /// Path to a requirements.txt within `source_dir`
    pub requirements: Option<String>,

    /// Path to the entry script within `source_dir`
    pub entry_script: Option<String>,

    /// Command(s) to execute, e.g. `python my_script.py`
    pub command: Option<String>,

    /// Patterns to skip when uploading `source_dir`
    pub ignore_patterns: Option<Vec<String>>,
}

impl Default for SourceCode {
    fn default() -> Self {
        Self {
            source_dir: None,
            requirements: None,
            entry_script: None,
            command: None,
            ignore_patterns: Some(
                DEFAULT_IGNORE_PATTERNS
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            ),
        }
    }
}

impl Record for SourceCode {
    fn schema() -> &'static Schema {
        &SOURCE_CODE_SCHEMA
    }
}

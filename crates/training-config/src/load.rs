//! Reading and writing records as JSON documents

use std::path::Path;

use serde_json::Value;
use shape_core::{Record, Result};
use tracing::debug;

/// Parse a record from a JSON document
///
/// The document goes through the same strict validation as any other
/// construction, so unknown keys are rejected.
pub fn from_json_str<R: Record>(json: &str) -> Result<R> {
    let value: Value = serde_json::from_str(json)?;
    R::from_value(value)
}

/// Read a record from a JSON file
pub fn from_json_file<R: Record>(path: impl AsRef<Path>) -> Result<R> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let record = from_json_str(&contents)?;
    debug!(
        record = R::schema().name,
        path = %path.display(),
        "loaded record"
    );
    Ok(record)
}

/// Pretty JSON with every declared field, absent ones as `null`
pub fn to_json_string<R: Record>(record: &R) -> Result<String> {
    let fields = record.to_fields()?;
    Ok(serde_json::to_string_pretty(&Value::Object(fields))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Compute, SourceCode};
    use shape_core::Error;
    use std::io::Write;

    #[test]
    fn test_from_json_str() {
        let compute: Compute =
            from_json_str(r#"{"instance_type": "ml.m5.xlarge", "instance_count": 2}"#).unwrap();
        assert_eq!(compute.volume_size_in_gb, Some(30));

        let err = from_json_str::<Compute>(r#"{"instance_type": "ml.m5.xlarge",}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));

        let err = from_json_str::<Compute>(r#"{"instance_types": "ml.m5.xlarge"}"#).unwrap_err();
        assert!(matches!(err, Error::SchemaViolation { .. }));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"source_dir": "./src", "command": "python train.py"}}"#).unwrap();

        let source: SourceCode = from_json_file(file.path()).unwrap();
        assert_eq!(source.command.as_deref(), Some("python train.py"));

        let err = from_json_file::<SourceCode>(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_written_document_reads_back() {
        let compute = Compute::new("ml.c5.xlarge", 3);
        let json = to_json_string(&compute).unwrap();
        assert!(json.contains("\"enable_managed_spot_training\": null"));

        let parsed: Compute = from_json_str(&json).unwrap();
        assert_eq!(parsed, compute);
    }
}

//! Output artifact shapes

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

pub static OUTPUT_DATA_CONFIG_SCHEMA: Schema = Schema {
    name: "OutputDataConfig",
    fields: &[
        Field::required("s3_output_path", FieldType::String),
        Field::optional("kms_key_id", FieldType::String),
        Field::optional("compression_type", FieldType::String),
    ],
};

pub static TENSOR_BOARD_OUTPUT_CONFIG_SCHEMA: Schema = Schema {
    name: "TensorBoardOutputConfig",
    fields: &[
        Field::required("s3_output_path", FieldType::String),
        Field::optional("local_path", FieldType::String),
    ],
};

pub static CHECKPOINT_CONFIG_SCHEMA: Schema = Schema {
    name: "CheckpointConfig",
    fields: &[
        Field::required("s3_uri", FieldType::String),
        Field::optional("local_path", FieldType::String),
    ],
};

/// Where model artifacts are uploaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputDataConfig {
    pub s3_output_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// `GZIP` or `NONE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
}

impl Record for OutputDataConfig {
    fn schema() -> &'static Schema {
        &OUTPUT_DATA_CONFIG_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TensorBoardOutputConfig {
    pub s3_output_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl Record for TensorBoardOutputConfig {
    fn schema() -> &'static Schema {
        &TENSOR_BOARD_OUTPUT_CONFIG_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckpointConfig {
    pub s3_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl Record for CheckpointConfig {
    fn schema() -> &'static Schema {
        &CHECKPOINT_CONFIG_SCHEMA
    }
}

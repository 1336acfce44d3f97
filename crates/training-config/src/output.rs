//! Output, TensorBoard and checkpoint locations
//!
//! Each record relaxes the matching job shape so every field is optional;
//! unset S3 locations are filled in by the job builder before submission.

use job_shapes as shapes;
use serde::{Deserialize, Serialize};
use shape_core::{project, Field, FieldType, Record, Result, Schema};

/// TensorBoard output directory inside the training container
pub const DEFAULT_TENSOR_BOARD_LOCAL_PATH: &str = "/opt/ml/output/tensorboard";

/// Checkpoint directory inside the training container
pub const DEFAULT_CHECKPOINT_LOCAL_PATH: &str = "/opt/ml/checkpoints";

pub static OUTPUT_DATA_CONFIG_SCHEMA: Schema = Schema {
    name: "OutputDataConfig",
    fields: &[
        Field::optional("s3_output_path", FieldType::String),
        Field::optional("kms_key_id", FieldType::String),
        Field::optional("compression_type", FieldType::String),
    ],
};

pub static TENSOR_BOARD_OUTPUT_CONFIG_SCHEMA: Schema = Schema {
    name: "TensorBoardOutputConfig",
    fields: &[
        Field::optional("s3_output_path", FieldType::String),
        Field::optional("local_path", FieldType::String),
    ],
};

pub static CHECKPOINT_CONFIG_SCHEMA: Schema = Schema {
    name: "CheckpointConfig",
    fields: &[
        Field::optional("s3_uri", FieldType::String),
        Field::optional("local_path", FieldType::String),
    ],
};

/// Where the job's output artifacts are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputDataConfig {
    /// S3 URI for model artifacts and logs
    pub s3_output_path: Option<String>,

    /// KMS key for server-side encryption of the artifacts
    pub kms_key_id: Option<String>,

    /// `GZIP` (service default) or `NONE` for large models
    pub compression_type: Option<String>,
}

impl OutputDataConfig {
    pub fn to_output_data_config(&self) -> Result<Option<shapes::OutputDataConfig>> {
        project(self)
    }
}

impl Record for OutputDataConfig {
    fn schema() -> &'static Schema {
        &OUTPUT_DATA_CONFIG_SCHEMA
    }
}

/// Storage locations for Debugger TensorBoard output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TensorBoardOutputConfig {
    pub s3_output_path: Option<String>,

    /// Defaults to /opt/ml/output/tensorboard
    pub local_path: Option<String>,
}

impl Default for TensorBoardOutputConfig {
    fn default() -> Self {
        Self {
            s3_output_path: None,
            local_path: Some(DEFAULT_TENSOR_BOARD_LOCAL_PATH.to_string()),
        }
    }
}

impl TensorBoardOutputConfig {
    pub fn to_tensor_board_output_config(
        &self,
    ) -> Result<Option<shapes::TensorBoardOutputConfig>> {
        project(self)
    }
}

impl Record for TensorBoardOutputConfig {
    fn schema() -> &'static Schema {
        &TENSOR_BOARD_OUTPUT_CONFIG_SCHEMA
    }
}

/// Checkpoint sync between the container and S3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CheckpointConfig {
    pub s3_uri: Option<String>,

    /// Defaults to /opt/ml/checkpoints
    pub local_path: Option<String>,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            s3_uri: None,
            local_path: Some(DEFAULT_CHECKPOINT_LOCAL_PATH.to_string()),
        }
    }
}

impl CheckpointConfig {
    pub fn to_checkpoint_config(&self) -> Result<Option<shapes::CheckpointConfig>> {
        project(self)
    }
}

impl Record for CheckpointConfig {
    fn schema() -> &'static Schema {
        &CHECKPOINT_CONFIG_SCHEMA
    }
}

//! Named input data channels

use job_shapes::data::{FILE_SYSTEM_DATA_SOURCE_SCHEMA, S3_DATA_SOURCE_SCHEMA};
use job_shapes::{FileSystemDataSource, S3DataSource};
use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

/// Mount root of input channels inside the training container
pub const INPUT_DATA_ROOT: &str = "/opt/ml/input/data";

pub static INPUT_DATA_SCHEMA: Schema = Schema {
    name: "InputData",
    fields: &[
        Field::required("channel_name", FieldType::String),
        Field::required(
            "data_source",
            FieldType::OneOf(&[
                FieldType::String,
                FieldType::Shape(&S3_DATA_SOURCE_SCHEMA),
                FieldType::Shape(&FILE_SYSTEM_DATA_SOURCE_SCHEMA),
            ]),
        ),
    ],
};

/// Where a channel's data comes from
///
/// A plain string may be a local path or a remote URI; telling them apart
/// is left to whoever builds the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSourceInput {
    Uri(String),
    S3(S3DataSource),
    FileSystem(FileSystemDataSource),
}

impl From<&str> for DataSourceInput {
    fn from(s: &str) -> Self {
        DataSourceInput::Uri(s.to_string())
    }
}

impl From<String> for DataSourceInput {
    fn from(s: String) -> Self {
        DataSourceInput::Uri(s)
    }
}

impl From<S3DataSource> for DataSourceInput {
    fn from(source: S3DataSource) -> Self {
        DataSourceInput::S3(source)
    }
}

impl From<FileSystemDataSource> for DataSourceInput {
    fn from(source: FileSystemDataSource) -> Self {
        DataSourceInput::FileSystem(source)
    }
}

/// One named input channel of a training job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputData {
    pub channel_name: String,
    pub data_source: DataSourceInput,
}

impl InputData {
    pub fn new(channel_name: impl Into<String>, data_source: impl Into<DataSourceInput>) -> Self {
        Self {
            channel_name: channel_name.into(),
            data_source: data_source.into(),
        }
    }

    /// Mount path of this channel inside the training container
    pub fn container_path(&self) -> String {
        format!("{}/{}", INPUT_DATA_ROOT, self.channel_name)
    }

    /// Environment variable the container exposes the mount path under
    pub fn channel_env_var(&self) -> String {
        format!("SM_CHANNEL_{}", self.channel_name.to_uppercase())
    }
}

impl Record for InputData {
    fn schema() -> &'static Schema {
        &INPUT_DATA_SCHEMA
    }
}

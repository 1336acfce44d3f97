//! Input data shapes

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

pub static S3_DATA_SOURCE_SCHEMA: Schema = Schema {
    name: "S3DataSource",
    fields: &[
        Field::required("s3_data_type", FieldType::String),
        Field::required("s3_uri", FieldType::String),
        Field::optional("s3_data_distribution_type", FieldType::String),
        Field::optional("attribute_names", FieldType::List(&FieldType::String)),
        Field::optional("instance_group_names", FieldType::List(&FieldType::String)),
    ],
};

pub static FILE_SYSTEM_DATA_SOURCE_SCHEMA: Schema = Schema {
    name: "FileSystemDataSource",
    fields: &[
        Field::required("file_system_id", FieldType::String),
        Field::required("file_system_access_mode", FieldType::String),
        Field::required("file_system_type", FieldType::String),
        Field::required("directory_path", FieldType::String),
    ],
};

pub static DATA_SOURCE_SCHEMA: Schema = Schema {
    name: "DataSource",
    fields: &[
        Field::optional("s3_data_source", FieldType::Shape(&S3_DATA_SOURCE_SCHEMA)),
        Field::optional(
            "file_system_data_source",
            FieldType::Shape(&FILE_SYSTEM_DATA_SOURCE_SCHEMA),
        ),
    ],
};

pub static SHUFFLE_CONFIG_SCHEMA: Schema = Schema {
    name: "ShuffleConfig",
    fields: &[Field::required("seed", FieldType::Integer)],
};

pub static CHANNEL_SCHEMA: Schema = Schema {
    name: "Channel",
    fields: &[
        Field::required("channel_name", FieldType::String),
        Field::required("data_source", FieldType::Shape(&DATA_SOURCE_SCHEMA)),
        Field::optional("content_type", FieldType::String),
        Field::optional("compression_type", FieldType::String),
        Field::optional("record_wrapper_type", FieldType::String),
        Field::optional("input_mode", FieldType::String),
        Field::optional("shuffle_config", FieldType::Shape(&SHUFFLE_CONFIG_SCHEMA)),
    ],
};

/// Object-store location of a channel's data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3DataSource {
    /// `S3Prefix`, `ManifestFile` or `AugmentedManifestFile`
    pub s3_data_type: String,
    pub s3_uri: String,

    /// `FullyReplicated` or `ShardedByS3Key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_group_names: Option<Vec<String>>,
}

impl S3DataSource {
    /// Prefix source replicated to every instance
    pub fn prefix(s3_uri: impl Into<String>) -> Self {
        Self {
            s3_data_type: "S3Prefix".to_string(),
            s3_uri: s3_uri.into(),
            s3_data_distribution_type: None,
            attribute_names: None,
            instance_group_names: None,
        }
    }
}

impl Record for S3DataSource {
    fn schema() -> &'static Schema {
        &S3_DATA_SOURCE_SCHEMA
    }
}

/// Shared file system holding a channel's data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSystemDataSource {
    pub file_system_id: String,

    /// `rw` or `ro`
    pub file_system_access_mode: String,

    /// `EFS` or `FSxLustre`
    pub file_system_type: String,
    pub directory_path: String,
}

impl Record for FileSystemDataSource {
    fn schema() -> &'static Schema {
        &FILE_SYSTEM_DATA_SOURCE_SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<S3DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_data_source: Option<FileSystemDataSource>,
}

impl Record for DataSource {
    fn schema() -> &'static Schema {
        &DATA_SOURCE_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShuffleConfig {
    pub seed: i64,
}

impl Record for ShuffleConfig {
    fn schema() -> &'static Schema {
        &SHUFFLE_CONFIG_SCHEMA
    }
}

/// A named input channel as submitted with the job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub channel_name: String,
    pub data_source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_wrapper_type: Option<String>,

    /// `File`, `Pipe` or `FastFile`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_config: Option<ShuffleConfig>,
}

impl Record for Channel {
    fn schema() -> &'static Schema {
        &CHANNEL_SCHEMA
    }
}

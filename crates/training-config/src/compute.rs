//! Compute resources for a training job

use job_shapes::{InstanceGroup, ResourceConfig};
use serde::{Deserialize, Serialize};
use shape_core::{project, Field, FieldType, Record, Result, Schema};

/// Storage volume size when none is given
pub const DEFAULT_VOLUME_SIZE_IN_GB: i64 = 30;

pub static COMPUTE_SCHEMA: Schema = Schema {
    name: "Compute",
    fields: &[
        Field::optional("instance_type", FieldType::String),
        Field::optional("instance_count", FieldType::Integer),
        Field::optional("volume_size_in_gb", FieldType::Integer),
        Field::optional("volume_kms_key_id", FieldType::String),
        Field::optional("keep_alive_period_in_seconds", FieldType::Integer),
        Field::optional(
            "instance_groups",
            FieldType::List(&FieldType::Shape(&job_shapes::resource::INSTANCE_GROUP_SCHEMA)),
        ),
        Field::optional("training_plan_arn", FieldType::String),
        Field::optional("enable_managed_spot_training", FieldType::Boolean),
    ],
};

/// Resource sizing for a training job
///
/// Carries every `ResourceConfig` field, all optional, plus the spot
/// training switch which is submitted separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Compute {
    /// ML compute instance type, e.g. `ml.m5.xlarge`
    pub instance_type: Option<String>,

    /// Number of instances; more than one for distributed training
    pub instance_count: Option<i64>,

    /// ML storage volume size (default: 30)
    pub volume_size_in_gb: Option<i64>,

    /// KMS key encrypting the storage volume
    pub volume_kms_key_id: Option<String>,

    /// Warm pool retention for follow-up jobs
    pub keep_alive_period_in_seconds: Option<i64>,

    /// Groups of a heterogeneous cluster
    pub instance_groups: Option<Vec<InstanceGroup>>,

    /// Training plan to draw capacity from
    pub training_plan_arn: Option<String>,

    /// Run on managed spot capacity
    pub enable_managed_spot_training: Option<bool>,
}

impl Default for Compute {
    fn default() -> Self {
        Self {
            instance_type: None,
            instance_count: None,
            volume_size_in_gb: Some(DEFAULT_VOLUME_SIZE_IN_GB),
            volume_kms_key_id: None,
            keep_alive_period_in_seconds: None,
            instance_groups: None,
            training_plan_arn: None,
            enable_managed_spot_training: None,
        }
    }
}

impl Compute {
    pub fn new(instance_type: impl Into<String>, instance_count: i64) -> Self {
        Self {
            instance_type: Some(instance_type.into()),
            instance_count: Some(instance_count),
            ..Default::default()
        }
    }

    /// Project onto the job's `ResourceConfig`
    ///
    /// Returns `None` when no resource field is set.
    pub fn to_resource_config(&self) -> Result<Option<ResourceConfig>> {
        project(self)
    }
}

impl Record for Compute {
    fn schema() -> &'static Schema {
        &COMPUTE_SCHEMA
    }
}

//! Compute resource shapes

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

pub static INSTANCE_GROUP_SCHEMA: Schema = Schema {
    name: "InstanceGroup",
    fields: &[
        Field::required("instance_type", FieldType::String),
        Field::required("instance_count", FieldType::Integer),
        Field::required("instance_group_name", FieldType::String),
    ],
};

pub static RESOURCE_CONFIG_SCHEMA: Schema = Schema {
    name: "ResourceConfig",
    fields: &[
        Field::optional("instance_type", FieldType::String),
        Field::optional("instance_count", FieldType::Integer),
        Field::required("volume_size_in_gb", FieldType::Integer),
        Field::optional("volume_kms_key_id", FieldType::String),
        Field::optional("keep_alive_period_in_seconds", FieldType::Integer),
        Field::optional(
            "instance_groups",
            FieldType::List(&FieldType::Shape(&INSTANCE_GROUP_SCHEMA)),
        ),
        Field::optional("training_plan_arn", FieldType::String),
    ],
};

/// One homogeneous group of a heterogeneous cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceGroup {
    pub instance_type: String,
    pub instance_count: i64,
    pub instance_group_name: String,
}

impl Record for InstanceGroup {
    fn schema() -> &'static Schema {
        &INSTANCE_GROUP_SCHEMA
    }
}

/// Resources provisioned for a training job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// ML compute instance type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    /// Number of instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,

    /// Size of the attached ML storage volume
    pub volume_size_in_gb: i64,

    /// KMS key encrypting the storage volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,

    /// Warm pool retention after the job ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive_period_in_seconds: Option<i64>,

    /// Heterogeneous cluster groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_groups: Option<Vec<InstanceGroup>>,

    /// Training plan ARN to draw capacity from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_plan_arn: Option<String>,
}

impl ResourceConfig {
    pub fn new(volume_size_in_gb: i64) -> Self {
        Self {
            instance_type: None,
            instance_count: None,
            volume_size_in_gb,
            volume_kms_key_id: None,
            keep_alive_period_in_seconds: None,
            instance_groups: None,
            training_plan_arn: None,
        }
    }
}

impl Record for ResourceConfig {
    fn schema() -> &'static Schema {
        &RESOURCE_CONFIG_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shape_core::Error;

    #[test]
    fn test_volume_size_is_required() {
        let err = ResourceConfig::from_value(json!({"instance_type": "ml.m5.xlarge"})).unwrap_err();
        assert_eq!(err.field_path(), Some("volume_size_in_gb"));
    }

    #[test]
    fn test_instance_groups() {
        let config = ResourceConfig::from_value(json!({
            "volume_size_in_gb": 50,
            "instance_groups": [
                {"instance_type": "ml.p4d.24xlarge", "instance_count": 2, "instance_group_name": "gpu"},
                {"instance_type": "ml.c5.18xlarge", "instance_count": 4, "instance_group_name": "cpu"},
            ],
        }))
        .unwrap();
        let groups = config.instance_groups.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].instance_group_name, "cpu");

        let err = ResourceConfig::from_value(json!({
            "volume_size_in_gb": 50,
            "instance_groups": [{"instance_type": "ml.p4d.24xlarge", "instance_count": 2}],
        }))
        .unwrap_err();
        assert!(matches!(err, Error::TypeViolation { .. }));
        assert_eq!(err.field_path(), Some("instance_groups[0].instance_group_name"));
    }
}

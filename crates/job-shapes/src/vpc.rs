//! Network shapes

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

pub static VPC_CONFIG_SCHEMA: Schema = Schema {
    name: "VpcConfig",
    fields: &[
        Field::required("security_group_ids", FieldType::List(&FieldType::String)),
        Field::required("subnets", FieldType::List(&FieldType::String)),
    ],
};

/// VPC the training containers attach to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpcConfig {
    /// Security group IDs (`sg-xxxxxxxx`)
    pub security_group_ids: Vec<String>,

    /// Subnet IDs
    pub subnets: Vec<String>,
}

impl Record for VpcConfig {
    fn schema() -> &'static Schema {
        &VPC_CONFIG_SCHEMA
    }
}

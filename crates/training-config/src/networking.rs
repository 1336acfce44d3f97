//! VPC and isolation settings

use job_shapes::VpcConfig;
use serde::{Deserialize, Serialize};
use shape_core::{project, Field, FieldType, Record, Result, Schema};

pub static NETWORKING_SCHEMA: Schema = Schema {
    name: "Networking",
    fields: &[
        Field::optional("security_group_ids", FieldType::List(&FieldType::String)),
        Field::optional("subnets", FieldType::List(&FieldType::String)),
        Field::optional("enable_network_isolation", FieldType::Boolean),
        Field::optional("enable_inter_container_traffic_encryption", FieldType::Boolean),
    ],
};

/// Networking configuration for a training job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Networking {
    /// Security groups (`sg-xxxxxxxx`) for the VPC of `subnets`
    pub security_group_ids: Option<Vec<String>>,

    /// Subnets the training containers attach to
    pub subnets: Option<Vec<String>>,

    /// Block all network calls except between peers of the cluster
    pub enable_network_isolation: Option<bool>,

    /// Encrypt traffic between instances in distributed training
    pub enable_inter_container_traffic_encryption: Option<bool>,
}

impl Networking {
    /// Project onto the job's `VpcConfig`
    ///
    /// Returns `None` when neither security groups nor subnets are set.
    pub fn to_vpc_config(&self) -> Result<Option<VpcConfig>> {
        project(self)
    }
}

impl Record for Networking {
    fn schema() -> &'static Schema {
        &NETWORKING_SCHEMA
    }
}

//! Job-level shapes passed through to submission unchanged

use serde::{Deserialize, Serialize};
use shape_core::{Field, FieldType, Record, Schema};

pub static STOPPING_CONDITION_SCHEMA: Schema = Schema {
    name: "StoppingCondition",
    fields: &[
        Field::optional("max_runtime_in_seconds", FieldType::Integer),
        Field::optional("max_wait_time_in_seconds", FieldType::Integer),
        Field::optional("max_pending_time_in_seconds", FieldType::Integer),
    ],
};

pub static RETRY_STRATEGY_SCHEMA: Schema = Schema {
    name: "RetryStrategy",
    fields: &[Field::required("maximum_retry_attempts", FieldType::Integer)],
};

pub static TRAINING_REPOSITORY_AUTH_CONFIG_SCHEMA: Schema = Schema {
    name: "TrainingRepositoryAuthConfig",
    fields: &[Field::required(
        "training_repository_credentials_provider_arn",
        FieldType::String,
    )],
};

pub static TRAINING_IMAGE_CONFIG_SCHEMA: Schema = Schema {
    name: "TrainingImageConfig",
    fields: &[
        Field::required("training_repository_access_mode", FieldType::String),
        Field::optional(
            "training_repository_auth_config",
            FieldType::Shape(&TRAINING_REPOSITORY_AUTH_CONFIG_SCHEMA),
        ),
    ],
};

pub static TAG_SCHEMA: Schema = Schema {
    name: "Tag",
    fields: &[
        Field::required("key", FieldType::String),
        Field::required("value", FieldType::String),
    ],
};

pub static INFRA_CHECK_CONFIG_SCHEMA: Schema = Schema {
    name: "InfraCheckConfig",
    fields: &[Field::optional("enable_infra_check", FieldType::Boolean)],
};

pub static REMOTE_DEBUG_CONFIG_SCHEMA: Schema = Schema {
    name: "RemoteDebugConfig",
    fields: &[Field::optional("enable_remote_debug", FieldType::Boolean)],
};

pub static SESSION_CHAINING_CONFIG_SCHEMA: Schema = Schema {
    name: "SessionChainingConfig",
    fields: &[Field::optional("enable_session_tag_chaining", FieldType::Boolean)],
};

pub static METRIC_DEFINITION_SCHEMA: Schema = Schema {
    name: "MetricDefinition",
    fields: &[
        Field::required("name", FieldType::String),
        Field::required("regex", FieldType::String),
    ],
};

/// Time limits for a training job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoppingCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i64>,

    /// Spot training only: total time including waiting for capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait_time_in_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pending_time_in_seconds: Option<i64>,
}

impl Record for StoppingCondition {
    fn schema() -> &'static Schema {
        &STOPPING_CONDITION_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryStrategy {
    pub maximum_retry_attempts: i64,
}

impl Record for RetryStrategy {
    fn schema() -> &'static Schema {
        &RETRY_STRATEGY_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainingRepositoryAuthConfig {
    pub training_repository_credentials_provider_arn: String,
}

impl Record for TrainingRepositoryAuthConfig {
    fn schema() -> &'static Schema {
        &TRAINING_REPOSITORY_AUTH_CONFIG_SCHEMA
    }
}

/// Registry access for a private training image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainingImageConfig {
    /// `Platform` or `Vpc`
    pub training_repository_access_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_repository_auth_config: Option<TrainingRepositoryAuthConfig>,
}

impl Record for TrainingImageConfig {
    fn schema() -> &'static Schema {
        &TRAINING_IMAGE_CONFIG_SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Record for Tag {
    fn schema() -> &'static Schema {
        &TAG_SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfraCheckConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_infra_check: Option<bool>,
}

impl Record for InfraCheckConfig {
    fn schema() -> &'static Schema {
        &INFRA_CHECK_CONFIG_SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteDebugConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_remote_debug: Option<bool>,
}

impl Record for RemoteDebugConfig {
    fn schema() -> &'static Schema {
        &REMOTE_DEBUG_CONFIG_SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionChainingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_session_tag_chaining: Option<bool>,
}

impl Record for SessionChainingConfig {
    fn schema() -> &'static Schema {
        &SESSION_CHAINING_CONFIG_SCHEMA
    }
}

/// Regex extracting a metric from the job's log stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDefinition {
    pub name: String,
    pub regex: String,
}

impl Record for MetricDefinition {
    fn schema() -> &'static Schema {
        &METRIC_DEFINITION_SCHEMA
    }
}

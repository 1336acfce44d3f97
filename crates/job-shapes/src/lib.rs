//! Job Shapes - Parameter shapes of the managed training job submission API
//!
//! Every shape is a strict [`Record`](shape_core::Record): unknown field
//! names and mistyped values are rejected, and fields the API requires are
//! plain (non-`Option`) Rust fields. Absent optional fields are left out
//! when a shape is serialized, so a nested shape reads back exactly as it
//! was assigned.

pub mod data;
pub mod job;
pub mod output;
pub mod resource;
pub mod vpc;

pub use data::{Channel, DataSource, FileSystemDataSource, S3DataSource, ShuffleConfig};
pub use job::{
    InfraCheckConfig, MetricDefinition, RemoteDebugConfig, RetryStrategy, SessionChainingConfig,
    StoppingCondition, Tag, TrainingImageConfig, TrainingRepositoryAuthConfig,
};
pub use output::{CheckpointConfig, OutputDataConfig, TensorBoardOutputConfig};
pub use resource::{InstanceGroup, ResourceConfig};
pub use vpc::VpcConfig;

//! Training Config - Typed configuration records for managed training jobs
//!
//! Records describe the source code, compute, networking, input channels
//! and output locations of a training job. All of them reject unknown
//! fields and mistyped values, at construction and on every assignment
//! made through [`Record::set`].
//!
//! # Example
//!
//! ```rust
//! use training_config::{Compute, Networking, Record};
//!
//! let mut compute = Compute::new("ml.m5.xlarge", 2);
//! compute.set("enable_managed_spot_training", true)?;
//!
//! let resources = compute.to_resource_config()?.expect("instance type is set");
//! assert_eq!(resources.volume_size_in_gb, 30);
//!
//! // nothing set, nothing to submit
//! assert!(Networking::default().to_vpc_config()?.is_none());
//! # Ok::<(), training_config::Error>(())
//! ```

pub mod compute;
pub mod input_data;
pub mod load;
pub mod networking;
pub mod output;
pub mod source_code;

pub use compute::{Compute, DEFAULT_VOLUME_SIZE_IN_GB};
pub use input_data::{DataSourceInput, InputData};
pub use load::{from_json_file, from_json_str, to_json_string};
pub use networking::Networking;
pub use output::{CheckpointConfig, OutputDataConfig, TensorBoardOutputConfig};
pub use source_code::{SourceCode, DEFAULT_IGNORE_PATTERNS};

pub use shape_core::{Error, Record, Result};

// Shapes handed to job submission as-is
pub use job_shapes as shapes;
pub use job_shapes::{
    Channel, DataSource, FileSystemDataSource, InfraCheckConfig, InstanceGroup, MetricDefinition,
    RemoteDebugConfig, RetryStrategy, S3DataSource, SessionChainingConfig, ShuffleConfig,
    StoppingCondition, Tag, TrainingImageConfig, TrainingRepositoryAuthConfig,
};

//! Building the parameter shapes of a training job from configuration records

use anyhow::Result;
use job_shapes::{ResourceConfig, VpcConfig};
use serde_json::json;
use shape_core::{Error, Record};
use training_config::{
    from_json_file, CheckpointConfig, Compute, DataSourceInput, FileSystemDataSource, InputData,
    Networking, S3DataSource, StoppingCondition,
};

#[test]
fn test_compute_projects_only_set_fields() -> Result<()> {
    let mut fields = serde_json::Map::new();
    fields.insert("instance_type".to_string(), json!("ml.m5.xlarge"));
    fields.insert("instance_count".to_string(), json!(2));
    let compute = Compute::from_fields(fields)?;

    let resources = compute.to_resource_config()?.expect("resources");
    let populated = resources.to_fields()?;
    let populated: Vec<_> = populated
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(populated, ["instance_type", "instance_count", "volume_size_in_gb"]);
    assert_eq!(
        resources,
        ResourceConfig {
            instance_type: Some("ml.m5.xlarge".to_string()),
            instance_count: Some(2),
            ..ResourceConfig::new(30)
        }
    );
    Ok(())
}

#[test]
fn test_default_networking_projects_to_no_configuration() -> Result<()> {
    let vpc: Option<VpcConfig> = Networking::default().to_vpc_config()?;
    assert!(vpc.is_none());
    Ok(())
}

#[test]
fn test_projection_failure_leaves_source_untouched() {
    let networking = Networking {
        security_group_ids: Some(vec!["sg-0a".to_string()]),
        enable_network_isolation: Some(true),
        ..Default::default()
    };
    let before = networking.clone();

    let err = networking.to_vpc_config().unwrap_err();
    assert!(matches!(err, Error::ProjectionConstructionFailure { .. }));
    assert_eq!(err.field_path(), Some("subnets"));
    assert_eq!(networking, before);
}

#[test]
fn test_input_channels_from_every_source_kind() -> Result<()> {
    let channels = vec![
        InputData::new("code", "./local/data"),
        InputData::new("train", S3DataSource::prefix("s3://bucket/train/")),
        InputData::new(
            "shared",
            FileSystemDataSource {
                file_system_id: "fs-0abc".to_string(),
                file_system_access_mode: "ro".to_string(),
                file_system_type: "EFS".to_string(),
                directory_path: "/datasets".to_string(),
            },
        ),
    ];

    for channel in &channels {
        channel.validate()?;
        let reparsed = InputData::from_fields(channel.to_fields()?)?;
        assert_eq!(&reparsed, channel);
    }

    assert!(matches!(channels[0].data_source, DataSourceInput::Uri(_)));
    assert_eq!(channels[2].container_path(), "/opt/ml/input/data/shared");
    Ok(())
}

#[test]
fn test_load_job_documents_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let compute_path = dir.path().join("compute.json");
    std::fs::write(
        &compute_path,
        json!({
            "instance_type": "ml.g5.12xlarge",
            "instance_count": 4,
            "enable_managed_spot_training": true,
            "keep_alive_period_in_seconds": 1800,
        })
        .to_string(),
    )?;
    let compute: Compute = from_json_file(&compute_path)?;
    assert_eq!(compute.enable_managed_spot_training, Some(true));
    assert_eq!(
        compute.to_resource_config()?.map(|r| r.keep_alive_period_in_seconds),
        Some(Some(1800))
    );

    let checkpoint_path = dir.path().join("checkpoint.json");
    std::fs::write(&checkpoint_path, r#"{"s3_uri": "s3://bucket/ckpt", "sync": true}"#)?;
    let err = from_json_file::<CheckpointConfig>(&checkpoint_path).unwrap_err();
    assert!(matches!(err, Error::SchemaViolation { ref field, .. } if field == "sync"));

    let stopping_path = dir.path().join("stopping.json");
    std::fs::write(&stopping_path, r#"{"max_runtime_in_seconds": 86400}"#)?;
    let stopping: StoppingCondition = from_json_file(&stopping_path)?;
    assert_eq!(stopping.max_runtime_in_seconds, Some(86400));
    Ok(())
}

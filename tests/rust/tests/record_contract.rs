//! Field-level contract shared by every configuration record

use anyhow::Result;
use serde_json::{json, Value};
use shape_core::{is_normalized, normalize_fields, Error, FieldType, Record};
use training_config::{
    Channel, CheckpointConfig, Compute, DataSource, InputData, Networking, OutputDataConfig,
    S3DataSource, SourceCode, StoppingCondition, TensorBoardOutputConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A value no field of the given type accepts
fn wrong_value_for(ty: &FieldType) -> Value {
    match ty {
        // an object would name unknown fields and fail as a schema violation
        FieldType::Shape(_) => json!(1),
        _ => json!({"unexpected": true}),
    }
}

/// Every declared field rejects a value of the wrong kind, unknown names
/// are rejected, and a conforming value reads back unchanged
fn assert_strict<R: Record + Clone + std::fmt::Debug + PartialEq>(
    mut record: R,
    valid_field: &str,
    valid_value: Value,
) -> Result<()> {
    let mut fields = serde_json::Map::new();
    fields.insert("not_a_field".to_string(), json!("x"));
    assert!(matches!(
        R::from_fields(fields),
        Err(Error::SchemaViolation { .. })
    ));

    let before = record.clone();
    assert!(matches!(
        record.set("not_a_field", "x"),
        Err(Error::SchemaViolation { .. })
    ));

    for field in R::schema().fields {
        let wrong = wrong_value_for(&field.ty);
        match record.set(field.name, wrong.clone()) {
            Err(Error::TypeViolation { field: path, .. }) => assert_eq!(path, field.name),
            other => panic!(
                "{}.{} accepted {}: {:?}",
                R::schema().name,
                field.name,
                wrong,
                other
            ),
        }

        let mut fields = record.to_fields()?;
        fields.insert(field.name.to_string(), wrong);
        assert!(matches!(
            R::from_fields(fields),
            Err(Error::TypeViolation { .. })
        ));
    }
    assert_eq!(record, before);

    record.set(valid_field, valid_value.clone())?;
    assert_eq!(record.get(valid_field)?, valid_value);
    Ok(())
}

#[test]
fn test_every_record_is_strict() -> Result<()> {
    init_tracing();

    assert_strict(SourceCode::default(), "entry_script", json!("train.py"))?;
    assert_strict(Compute::default(), "instance_count", json!(8))?;
    assert_strict(
        Compute::default(),
        "instance_groups",
        json!([{"instance_type": "ml.p4d.24xlarge", "instance_count": 2, "instance_group_name": "gpu"}]),
    )?;
    assert_strict(Networking::default(), "enable_network_isolation", json!(true))?;
    assert_strict(OutputDataConfig::default(), "kms_key_id", json!("alias/ml"))?;
    assert_strict(TensorBoardOutputConfig::default(), "local_path", json!("/tb"))?;
    assert_strict(CheckpointConfig::default(), "s3_uri", json!("s3://bucket/ckpt"))?;
    assert_strict(
        InputData::new("train", "s3://bucket/train"),
        "data_source",
        json!({"s3_data_type": "S3Prefix", "s3_uri": "s3://bucket/val/"}),
    )?;
    Ok(())
}

#[test]
fn test_every_job_shape_is_strict() -> Result<()> {
    assert_strict(StoppingCondition::default(), "max_runtime_in_seconds", json!(3600))?;
    assert_strict(
        S3DataSource::prefix("s3://bucket/train"),
        "attribute_names",
        json!(["source-ref", "class"]),
    )?;
    assert_strict(
        Channel {
            channel_name: "train".to_string(),
            data_source: DataSource::default(),
            content_type: None,
            compression_type: None,
            record_wrapper_type: None,
            input_mode: None,
            shuffle_config: None,
        },
        "shuffle_config",
        json!({"seed": 7}),
    )?;
    Ok(())
}

#[test]
fn test_normalizing_dumps_is_idempotent() -> Result<()> {
    let compute = Compute::new("ml.m5.xlarge", 2);
    let mut fields = compute.to_fields()?;
    assert!(!is_normalized(&fields));

    normalize_fields(&mut fields);
    let once = fields.clone();
    normalize_fields(&mut fields);
    assert_eq!(fields, once);

    let names: Vec<_> = fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["instance_type", "instance_count", "volume_size_in_gb"]);
    Ok(())
}

#[test]
fn test_fresh_record_defaults() {
    assert_eq!(
        SourceCode::default().ignore_patterns,
        Some(
            [".env", ".git", "__pycache__", ".DS_Store", ".cache", ".ipynb_checkpoints"]
                .map(String::from)
                .to_vec()
        )
    );
    assert_eq!(
        CheckpointConfig::default().local_path.as_deref(),
        Some("/opt/ml/checkpoints")
    );
    assert_eq!(
        TensorBoardOutputConfig::default().local_path.as_deref(),
        Some("/opt/ml/output/tensorboard")
    );
    assert_eq!(Compute::default().volume_size_in_gb, Some(30));
}

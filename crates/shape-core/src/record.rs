//! The `Record` trait: strictly validated construction and assignment

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::schema::{kind_of, Fields, Schema};
use crate::{Error, Result};

/// A typed record backed by a declared [`Schema`]
///
/// Typed fields give compile-time checking for direct mutation. The
/// name-based operations below go through the schema so unknown names and
/// mistyped values are rejected at runtime, at construction and on every
/// assignment.
pub trait Record: Serialize + DeserializeOwned {
    /// Declared field set of this record
    fn schema() -> &'static Schema;

    /// Construct from named field values
    ///
    /// Omitted fields take their declared defaults.
    fn from_fields(fields: Fields) -> Result<Self> {
        let schema = Self::schema();
        schema.validate(&fields)?;
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| Error::type_violation(schema.name, "<record>", schema.name, e.to_string()))
    }

    /// Construct from a JSON object
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => {
                let schema = Self::schema();
                Err(Error::type_violation(
                    schema.name,
                    "<record>",
                    "object",
                    kind_of(&other),
                ))
            }
        }
    }

    /// Dump every declared field
    ///
    /// Absent fields appear as `null` unless the record skips them when
    /// serializing, as nested job shapes do.
    fn to_fields(&self) -> Result<Fields> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            other => Err(Error::Serialization(format!(
                "{} encoded as {}",
                Self::schema().name,
                kind_of(&other)
            ))),
        }
    }

    /// Read a field by name
    fn get(&self, field: &str) -> Result<Value> {
        let schema = Self::schema();
        if !schema.contains(field) {
            return Err(Error::schema_violation(schema.name, field));
        }
        Ok(self.to_fields()?.remove(field).unwrap_or(Value::Null))
    }

    /// Assign a field by name
    ///
    /// The record is left untouched if the assignment is rejected.
    fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<()>
    where
        Self: Sized,
    {
        let value = value.into();
        Self::schema().validate_field(field, &value)?;

        let mut fields = self.to_fields()?;
        fields.insert(field.to_string(), value);
        *self = Self::from_fields(fields)?;

        debug!(record = Self::schema().name, field, "assigned field");
        Ok(())
    }

    /// Re-validate the current state against the schema
    fn validate(&self) -> Result<()> {
        Self::schema().validate(&self.to_fields()?)
    }
}

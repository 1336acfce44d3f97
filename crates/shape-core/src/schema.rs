//! Declarative field schemas and strict validation
//!
//! A [`Schema`] lists every field a record accepts. Validation runs in two
//! passes over a field map: unknown names first, then declared types.
//! Nested shapes are validated recursively and errors carry the full path
//! of the offending field (`instance_groups[1].instance_count`).

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Flat mapping of field name to value, in declaration order
pub type Fields = Map<String, Value>;

/// Declared type of a field
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// UTF-8 string
    String,

    /// Signed 64-bit integer (floats and numeric strings are rejected)
    Integer,

    /// true / false
    Boolean,

    /// Homogeneous list
    List(&'static FieldType),

    /// Nested record validated against its own schema
    Shape(&'static Schema),

    /// Closed union, accepted if any member accepts the value
    OneOf(&'static [FieldType]),
}

impl FieldType {
    /// Human readable type name used in error messages
    pub fn describe(&self) -> String {
        match self {
            FieldType::String => "string".to_string(),
            FieldType::Integer => "integer".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::List(inner) => format!("list of {}", inner.describe()),
            FieldType::Shape(schema) => schema.name.to_string(),
            FieldType::OneOf(members) => members
                .iter()
                .map(FieldType::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// A single declared field
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,

    /// Required fields reject the absence marker
    pub required: bool,
}

impl Field {
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }

    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }
}

/// Field set of a record or shape
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Validate a complete field map against this schema
    ///
    /// Omitted optional fields are fine; omitted required fields are a
    /// `TypeViolation` since absence does not conform to the declared type.
    pub fn validate(&self, fields: &Fields) -> Result<()> {
        self.validate_at(fields, "")
    }

    /// Validate a single value for the named field
    pub fn validate_field(&self, name: &str, value: &Value) -> Result<()> {
        let field = self
            .field(name)
            .ok_or_else(|| Error::schema_violation(self.name, name))?;
        self.check_field(field, Some(value), name)
    }

    fn validate_at(&self, fields: &Fields, prefix: &str) -> Result<()> {
        if let Some(unknown) = fields.keys().find(|k| !self.contains(k)) {
            return Err(Error::schema_violation(self.name, join(prefix, unknown)));
        }

        for field in self.fields {
            self.check_field(field, fields.get(field.name), &join(prefix, field.name))?;
        }

        Ok(())
    }

    fn check_field(&self, field: &Field, value: Option<&Value>, path: &str) -> Result<()> {
        match value {
            None | Some(Value::Null) if field.required => Err(Error::type_violation(
                self.name,
                path,
                field.ty.describe(),
                "nothing",
            )),
            None | Some(Value::Null) => Ok(()),
            Some(value) => self.check_type(&field.ty, value, path),
        }
    }

    fn check_type(&self, ty: &FieldType, value: &Value, path: &str) -> Result<()> {
        let mismatch = || Error::type_violation(self.name, path, ty.describe(), kind_of(value));

        match (ty, value) {
            (FieldType::String, Value::String(_)) => Ok(()),
            (FieldType::Integer, Value::Number(n)) if n.is_i64() => Ok(()),
            (FieldType::Boolean, Value::Bool(_)) => Ok(()),
            (FieldType::List(inner), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    self.check_type(inner, item, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            (FieldType::Shape(schema), Value::Object(fields)) => {
                // Nested errors name the outer record with the full path
                schema.validate_at(fields, path).map_err(|e| match e {
                    Error::SchemaViolation { field, .. } => Error::schema_violation(self.name, field),
                    Error::TypeViolation {
                        field,
                        expected,
                        found,
                        ..
                    } => Error::type_violation(self.name, field, expected, found),
                    other => other,
                })
            }
            (FieldType::OneOf(members), _) => {
                if members
                    .iter()
                    .any(|member| self.check_type(member, value, path).is_ok())
                {
                    Ok(())
                } else {
                    Err(mismatch())
                }
            }
            _ => Err(mismatch()),
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// JSON kind of a value, for error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

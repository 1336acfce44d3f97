//! Shape Core - Foundation for validated training job configuration
//!
//! Provides the error type, declarative schemas with strict validation,
//! the `Record` trait, absence normalization and narrowing projection
//! shared by the shape and configuration crates.

pub mod error;
pub mod normalize;
pub mod projection;
pub mod record;
pub mod schema;

pub use error::{Error, Result};
pub use normalize::{is_normalized, normalize_fields};
pub use projection::project;
pub use record::Record;
pub use schema::{Field, FieldType, Fields, Schema};

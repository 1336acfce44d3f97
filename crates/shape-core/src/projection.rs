//! Narrowing projection from a richer record onto an external shape

use tracing::debug;

use crate::normalize::normalize_fields;
use crate::record::Record;
use crate::{Error, Result};

/// Project `source` onto the shape `T`
///
/// Keeps only fields `T` declares, drops absent ones, and returns `None`
/// when nothing is left. Failure to build `T` from what remains is reported
/// as `ProjectionConstructionFailure`; `source` is never modified.
pub fn project<S, T>(source: &S) -> Result<Option<T>>
where
    S: Record,
    T: Record,
{
    let target = T::schema();

    let mut fields = source.to_fields()?;
    fields.retain(|name, _| target.contains(name));
    normalize_fields(&mut fields);

    if fields.is_empty() {
        debug!(
            source = S::schema().name,
            target = target.name,
            "nothing to project"
        );
        return Ok(None);
    }

    let projected: Vec<String> = fields.keys().cloned().collect();
    let shape = T::from_fields(fields).map_err(|e| Error::ProjectionConstructionFailure {
        source_record: S::schema().name.to_string(),
        target: target.name.to_string(),
        source: Box::new(e),
    })?;

    debug!(
        source = S::schema().name,
        target = target.name,
        fields = ?projected,
        "projected record"
    );
    Ok(Some(shape))
}

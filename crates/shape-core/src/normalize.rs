//! Absence normalization for dumped field maps

use crate::schema::Fields;

/// Drop every field holding the absence marker
///
/// Records use `Option::None` as their only absence representation, so this
/// is the single place where "unset" is distinguished from a value.
/// Running it on an already-normalized map changes nothing.
pub fn normalize_fields(fields: &mut Fields) {
    fields.retain(|_, value| !value.is_null());
}

/// Returns true if no field holds the absence marker
pub fn is_normalized(fields: &Fields) -> bool {
    fields.values().all(|value| !value.is_null())
}

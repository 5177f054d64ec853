//! Top-level field filtering
//!
//! Drops record keys whose inferred type tag is not in a caller-supplied
//! allow-set. Filtering applies to top-level fields only; nested structs
//! and arrays pass through untouched.

use super::types::{StructType, TypeTag};
use crate::types::JsonObject;
use std::collections::HashSet;

/// Remove top-level keys whose coarse type is not in `included`.
///
/// The record is taken by value and handed back with the dropped keys
/// removed; surviving keys keep their original order. The schema must be the
/// one inferred from this record.
pub fn filter_fields(
    schema: &StructType,
    mut record: JsonObject,
    included: &HashSet<TypeTag>,
) -> JsonObject {
    for field in &schema.fields {
        if !included.contains(&field.data_type.tag()) {
            record.shift_remove(&field.name);
        }
    }

    record
}

//! Schema inference from JSON values
//!
//! A single-pass recursive walk over one parsed document. Scalars go through
//! the classifier, objects become structs with fields in key order, arrays
//! take their element type from the first element.

use super::types::{ArrayType, Field, ScalarKind, SchemaType, StructType, TypeTag};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Default recursion limit for nested values
pub const DEFAULT_MAX_DEPTH: usize = 64;

// Integral values classify by window: [-2^32, 2^32 - 1] is an integer,
// [-2^64, 2^64 - 1] a long, anything further out is an error. The bounds
// are f64 like the values they are compared against.
const INT32_MIN: f64 = -4_294_967_296.0;
const INT32_MAX: f64 = 4_294_967_295.0;
const INT64_MIN: f64 = -18_446_744_073_709_551_616.0;
const INT64_MAX: f64 = 18_446_744_073_709_551_615.0;

/// Fractional digit count above which a number is a double rather than a float
const MAX_FLOAT_PRECISION: usize = 7;

// ============================================================================
// Scalar Classifier
// ============================================================================

/// Classify a JSON value into its coarse type tag.
///
/// Total over every `serde_json` value: scalars map to their scalar kind,
/// objects and arrays report `struct` and `array` so the caller can recurse.
pub fn classify(value: &JsonValue) -> Result<TypeTag> {
    Ok(match value {
        JsonValue::Null => TypeTag::Null,
        JsonValue::Bool(_) => TypeTag::Boolean,
        JsonValue::String(_) => TypeTag::String,
        JsonValue::Number(number) => classify_number(number)?.into(),
        JsonValue::Object(_) => TypeTag::Struct,
        JsonValue::Array(_) => TypeTag::Array,
    })
}

/// Classify a JSON number as integer, long, float or double.
pub(crate) fn classify_number(number: &serde_json::Number) -> Result<ScalarKind> {
    // serde_json numbers are i64, u64 or f64; all three project onto f64
    // the same way JSON number literals do.
    let value = number
        .as_f64()
        .ok_or_else(|| Error::integer_out_of_range(number.to_string()))?;

    if value.fract() == 0.0 {
        integer_kind(value, number)
    } else {
        Ok(fractional_kind(value))
    }
}

fn integer_kind(value: f64, raw: &serde_json::Number) -> Result<ScalarKind> {
    if (INT32_MIN..=INT32_MAX).contains(&value) {
        Ok(ScalarKind::Integer)
    } else if (INT64_MIN..=INT64_MAX).contains(&value) {
        Ok(ScalarKind::Long)
    } else {
        Err(Error::integer_out_of_range(raw.to_string()))
    }
}

/// Float vs double is decided from the decimal rendering: count the digits
/// after the last `.` and compare against [`MAX_FLOAT_PRECISION`]. A textual
/// heuristic, not an IEEE-754 bit-width test.
fn fractional_kind(value: f64) -> ScalarKind {
    let rendered = value.to_string();
    let precision = rendered.rsplit('.').next().map_or(0, str::len);

    if precision > MAX_FLOAT_PRECISION {
        ScalarKind::Double
    } else {
        ScalarKind::Float
    }
}

// ============================================================================
// Schema Inferrer
// ============================================================================

/// Schema inferrer with a configurable recursion limit
///
/// Stateless across calls; the same input always produces the same schema.
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Maximum depth for nested values
    max_depth: usize,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Infer the schema of a JSON document.
    ///
    /// The root of a document is always a struct; callers hand in the parsed
    /// object itself.
    pub fn infer(&self, record: &JsonObject) -> Result<StructType> {
        self.infer_struct(record, 0)
    }

    fn infer_struct(&self, obj: &JsonObject, depth: usize) -> Result<StructType> {
        self.check_depth(depth)?;

        let mut schema = StructType::new();
        for (key, value) in obj {
            let data_type = self.infer_value(value, depth)?;
            schema
                .fields
                .push(Field::new(key.clone(), data_type, value.is_null()));
        }

        Ok(schema)
    }

    fn infer_array(&self, items: &[JsonValue], depth: usize) -> Result<ArrayType> {
        self.check_depth(depth)?;

        // Only the first element is inspected; arrays are assumed homogeneous
        // and empty arrays default to string elements.
        let element_type = match items.first() {
            None => SchemaType::Scalar(ScalarKind::String),
            Some(element) => self.infer_value(element, depth)?,
        };

        // Element nulls are not scanned; the flag is always false here.
        Ok(ArrayType::new(element_type, false))
    }

    fn infer_value(&self, value: &JsonValue, depth: usize) -> Result<SchemaType> {
        match value {
            JsonValue::Object(map) => Ok(SchemaType::Struct(self.infer_struct(map, depth + 1)?)),
            JsonValue::Array(items) => Ok(SchemaType::Array(self.infer_array(items, depth + 1)?)),
            JsonValue::Number(number) => Ok(SchemaType::Scalar(classify_number(number)?)),
            JsonValue::Null => Ok(SchemaType::Scalar(ScalarKind::Null)),
            JsonValue::Bool(_) => Ok(SchemaType::Scalar(ScalarKind::Boolean)),
            JsonValue::String(_) => Ok(SchemaType::Scalar(ScalarKind::String)),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth));
        }
        Ok(())
    }
}

/// Infer a schema with default settings (convenience function)
pub fn infer_schema(record: &JsonObject) -> Result<StructType> {
    SchemaInferrer::new().infer(record)
}

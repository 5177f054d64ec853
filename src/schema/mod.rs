//! Schema inference module
//!
//! Builds Spark-style schemas from parsed JSON documents.
//!
//! # Features
//!
//! - **Scalar Classification**: string/integer/long/float/double/boolean/null
//! - **Struct Inference**: ordered, named, nullable fields
//! - **Array Inference**: element type taken from a representative element
//! - **Field Filtering**: drop top-level fields by type tag
//! - **Canonical JSON**: Spark-compatible serialization of the schema tree

mod filter;
mod inference;
mod types;

pub use filter::filter_fields;
pub use inference::{classify, infer_schema, SchemaInferrer, DEFAULT_MAX_DEPTH};
pub use types::{ArrayType, Field, ScalarKind, SchemaType, StructType, TypeTag};

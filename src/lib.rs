//! # json2spark
//!
//! Infer Spark-style schemas from JSON sample records.
//!
//! ## Features
//!
//! - **Schema Inference**: structs, arrays and seven scalar kinds from any parsed JSON object
//! - **Field Filtering**: keep only top-level fields whose type tag is allowed
//! - **Canonical JSON**: Spark-compatible serialization of the schema tree
//! - **Sample Records**: cached random-record fetching for quick experiments
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use json2spark::schema::infer_schema;
//! use json2spark::Result;
//!
//! fn main() -> Result<()> {
//!     let record = serde_json::from_str(r#"{"id": 1, "name": "Ada"}"#)?;
//!     let schema = infer_schema(&record)?;
//!     println!("{}", schema.to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                        CLI                             │
//! │  infer FILE → schema JSON    sample → fetch + schema   │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴─────────────┬──────────────┐
//! │    Sample    │          Schema          │    Config    │
//! ├──────────────┼──────────────────────────┼──────────────┤
//! │ Cache        │ Classifier               │ Settings     │
//! │ HTTP source  │ Struct/Array inference   │ Include set  │
//! │              │ Top-level field filter   │ Depth limit  │
//! └──────────────┴──────────────────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for json2spark
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client used by the sample fetcher
pub mod http;

/// Schema inference from JSON data
pub mod schema;

/// Sample record cache and sources
pub mod sample;

/// Tool settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use schema::{infer_schema, ScalarKind, SchemaInferrer, SchemaType, StructType, TypeTag};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! CLI module
//!
//! Command-line interface for inferring schemas.
//!
//! # Commands
//!
//! - `infer` - Infer the schema of a JSON document from a file or stdin
//! - `sample` - Fetch a random sample record and infer its schema
//! - `types` - List the type tags accepted by --include

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

//! Sample record module
//!
//! Supplies the JSON documents the schema engine is pointed at.
//!
//! # Overview
//!
//! - `RecordSource` - seam for fetching one sample record
//! - `HttpRecordSource` - random `/users/{id}` record over HTTP
//! - `SampleCache` - caller-owned cache with get/update/refresh

mod cache;
mod source;

pub use cache::SampleCache;
pub use source::{HttpRecordSource, RecordSource};

#[cfg(test)]
mod tests;

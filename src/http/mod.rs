//! HTTP client module
//!
//! A thin client used by the sample fetcher.
//!
//! # Features
//!
//! - **Retries**: timeouts, connect failures and retryable statuses
//! - **Backoff**: constant, linear or exponential
//! - **Rate Limits**: honors Retry-After on 429 responses

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

//! HTTP transport module
//!
//! Provides the HTTP client used by every facade and the `Transport`
//! trait that the batching engine drives.
//!
//! # Features
//!
//! - **JSON over GET**: every RDS endpoint is a GET returning JSON
//! - **API Key**: optional credential attached as an `X-API-KEY` header
//! - **Fail Fast**: any non-2xx response is an error carrying the status and URL

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, Transport};

//! Single-shot HTTP request helper.
//!
//! One client, one operation: [`FetchClient::fetch`] builds a request from a
//! [`FetchRequest`], issues it, classifies the response by status range and
//! decodes the JSON body into a caller-chosen type. Every dispatch and
//! outcome is tallied by a shared [`RequestMetrics`] aggregator.

pub use chrono;
pub use reqwest;
pub use serde;
pub use serde_json;

pub mod http;
pub mod logger;
pub mod metrics;

pub use http::client::FetchClient;
pub use http::error::FetchError;
pub use http::request::FetchRequest;
pub use metrics::RequestMetrics;

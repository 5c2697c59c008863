//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the assertion/test code and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer, including test doubles.

mod http_client;

pub use http_client::HttpClient;

//! Testutils Domain - Core types
//!
//! This crate defines the values shared by the assertion engine and the
//! HTTP client port: assertion diagnostics, request/response descriptions
//! and client configuration. All types here are pure Rust with no I/O.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod request;
pub mod response;

pub use config::HttpClientConfig;
pub use diagnostic::Diagnostic;
pub use error::{DomainError, DomainResult};
pub use request::{Header, Headers, HttpMethod, RequestSpec};
pub use response::ResponseSpec;

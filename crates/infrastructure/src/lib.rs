//! Testutils Infrastructure - Adapters and test doubles
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: a reqwest-backed HTTP client for real traffic and a
//! queue-replay stub for deterministic tests.

pub mod adapters;
pub mod testing;

pub use adapters::ReqwestHttpClient;
pub use testing::{RecordedCall, StubClient, StubResponse};

//! Test doubles for the ports defined in the application layer.

mod stub_client;

pub use stub_client::{RecordedCall, StubClient, StubResponse};

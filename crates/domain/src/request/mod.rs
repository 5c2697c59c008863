//! HTTP request types shared by the client port and its adapters.

mod header;
mod method;
mod spec;

pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use spec::RequestSpec;

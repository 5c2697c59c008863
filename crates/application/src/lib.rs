//! Testutils Application - assertion engine and ports
//!
//! This crate holds the logic that tests call into: composable assertions
//! over values and collections, and the ports (traits) that code under test
//! depends on so tests can swap in deterministic doubles.

pub mod assertions;
pub mod error;
pub mod ports;

pub use assertions::{
    Assertion, ErrorSubject, Quantified, Quantifier, Sequence, Tally, all, any, at_least,
    at_most, count_passing_elements, exactly, join_comparisons, none,
    should_have_error_message_with_substring,
};
pub use error::{
    ApplicationError, ApplicationResult, AssertionError, HttpClientError, HttpResult,
};
pub use ports::HttpClient;

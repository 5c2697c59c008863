//! Composable test assertions.
//!
//! An [`Assertion`] checks one actual value against a list of expected
//! values and reports a [`Diagnostic`](testutils_domain::Diagnostic). The
//! quantifiers in [`quantifier`] lift an element assertion to a whole
//! collection, and because they are assertions themselves they nest:
//!
//! ```
//! use testutils_application::assertions::{Assertion, at_least, comparisons::should_be_greater_than};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let verdict = at_least(2, should_be_greater_than).check(&numbers, &[2]);
//! assert!(verdict.is_pass());
//! ```

mod assertion;
pub mod comparisons;
mod error_message;
pub mod quantifier;
mod sequence;

pub use assertion::{Assertion, join_comparisons};
pub use error_message::{ErrorSubject, should_have_error_message_with_substring};
pub use quantifier::{
    Quantified, Quantifier, Tally, all, any, at_least, at_most, count_passing_elements, exactly,
    none,
};
pub use sequence::Sequence;

//! The assertion shape shared by predicates and quantifiers.

use testutils_domain::Diagnostic;

/// A check of one actual value against zero or more expected values.
///
/// Implementations must be pure: the same inputs always produce the same
/// diagnostic. Any `Fn(&A, &[E]) -> D` where `D: Into<Diagnostic>` is an
/// assertion, so plain functions and closures returning either a
/// [`Diagnostic`] or a raw `String` can be used directly.
pub trait Assertion<A: ?Sized, E> {
    /// Runs the assertion. An empty diagnostic means it passed.
    fn check(&self, actual: &A, expected: &[E]) -> Diagnostic;
}

impl<A, E, F, D> Assertion<A, E> for F
where
    A: ?Sized,
    F: Fn(&A, &[E]) -> D,
    D: Into<Diagnostic>,
{
    fn check(&self, actual: &A, expected: &[E]) -> Diagnostic {
        self(actual, expected).into()
    }
}

/// Returns the first failing diagnostic, or a pass if every one passed.
///
/// Useful for per-element assertions that compare several fields in turn
/// and should only report the first field that differs.
pub fn join_comparisons<I>(comparisons: I) -> Diagnostic
where
    I: IntoIterator,
    I::Item: Into<Diagnostic>,
{
    comparisons
        .into_iter()
        .map(Into::into)
        .find(Diagnostic::is_failure)
        .unwrap_or_default()
}

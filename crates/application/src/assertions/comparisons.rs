//! Primitive comparisons.
//!
//! Each comparison takes an actual value and exactly one expected value and
//! fits the [`Assertion`](super::Assertion) shape, so it can be handed
//! straight to a quantifier. Equality failures carry the compared values as
//! structured fields; the others are plain text.

use std::fmt::Display;

use regex::Regex;
use testutils_domain::Diagnostic;

fn single<U>(expected: &[U]) -> Result<&U, Diagnostic> {
    match expected {
        [value] => Ok(value),
        _ => Err(Diagnostic::fail(format!(
            "This assertion requires exactly 1 comparison values (you provided {}).",
            expected.len()
        ))),
    }
}

/// Passes when `actual == expected[0]`.
pub fn should_equal<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display,
{
    let expected = match single(expected) {
        Ok(value) => value,
        Err(arity) => return arity,
    };
    if actual == expected {
        return Diagnostic::pass();
    }
    Diagnostic::structured(
        format!("Expected: '{expected}'\nActual:   '{actual}'\n(Should be equal)"),
        expected.to_string(),
        actual.to_string(),
    )
}

/// Passes when `actual != expected[0]`.
pub fn should_not_equal<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display,
{
    match single(expected) {
        Ok(expected) if actual == expected => Diagnostic::fail(format!(
            "Expected '{actual}'\nto NOT equal '{expected}'\n(but it did)!"
        )),
        Ok(_) => Diagnostic::pass(),
        Err(arity) => arity,
    }
}

/// Passes when `actual > expected[0]`.
pub fn should_be_greater_than<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display,
{
    ordering(actual, expected, "greater than", |a, e| a > e)
}

/// Passes when `actual >= expected[0]`.
pub fn should_be_greater_than_or_equal_to<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display,
{
    ordering(actual, expected, "greater than or equal to", |a, e| a >= e)
}

/// Passes when `actual < expected[0]`.
pub fn should_be_less_than<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display,
{
    ordering(actual, expected, "less than", |a, e| a < e)
}

/// Passes when `actual <= expected[0]`.
pub fn should_be_less_than_or_equal_to<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: PartialOrd<U> + Display + ?Sized,
    U: Display,
{
    ordering(actual, expected, "less than or equal to", |a, e| a <= e)
}

fn ordering<T, U>(
    actual: &T,
    expected: &[U],
    relation: &str,
    holds: impl Fn(&T, &U) -> bool,
) -> Diagnostic
where
    T: Display + ?Sized,
    U: Display,
{
    match single(expected) {
        Ok(expected) if holds(actual, expected) => Diagnostic::pass(),
        Ok(expected) => Diagnostic::fail(format!(
            "Expected '{actual}' to be {relation} '{expected}' (but it wasn't)!"
        )),
        Err(arity) => arity,
    }
}

/// Passes when `actual` contains `expected[0]` as a substring.
pub fn should_contain_substring<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: AsRef<str> + ?Sized,
    U: AsRef<str>,
{
    match single(expected) {
        Ok(expected) if actual.as_ref().contains(expected.as_ref()) => Diagnostic::pass(),
        Ok(expected) => Diagnostic::fail(format!(
            "Expected '{}' to contain substring '{}' (but it didn't)!",
            actual.as_ref(),
            expected.as_ref()
        )),
        Err(arity) => arity,
    }
}

/// Passes when `actual` matches the regular expression `expected[0]`.
///
/// An invalid pattern is reported as a failure, never a panic.
pub fn should_match_pattern<T, U>(actual: &T, expected: &[U]) -> Diagnostic
where
    T: AsRef<str> + ?Sized,
    U: AsRef<str>,
{
    let pattern = match single(expected) {
        Ok(pattern) => pattern.as_ref(),
        Err(arity) => return arity,
    };
    match Regex::new(pattern) {
        Ok(regex) if regex.is_match(actual.as_ref()) => Diagnostic::pass(),
        Ok(_) => Diagnostic::fail(format!(
            "Expected '{}' to match pattern '{pattern}' (but it didn't)!",
            actual.as_ref()
        )),
        Err(e) => Diagnostic::fail(format!("Invalid regex pattern '{pattern}': {e}")),
    }
}

//! Assertion on the text of an error.

use std::error::Error;

use testutils_domain::Diagnostic;

use super::comparisons::should_contain_substring;

/// A value that may or may not hold an error.
///
/// `None` and `Ok(_)` play the role of "no error".
pub trait ErrorSubject {
    /// Returns the held error, if any.
    fn error(&self) -> Option<&dyn Error>;
}

impl<E: Error> ErrorSubject for Option<E> {
    fn error(&self) -> Option<&dyn Error> {
        self.as_ref().map(|e| e as &dyn Error)
    }
}

impl<T, E: Error> ErrorSubject for Result<T, E> {
    fn error(&self) -> Option<&dyn Error> {
        self.as_ref().err().map(|e| e as &dyn Error)
    }
}

/// Passes when `actual` holds an error whose message contains `expected[0]`.
///
/// Every violated precondition is reported as a failing diagnostic: the
/// expected list must have exactly one entry, an error must be present and
/// the expected substring must not be empty.
pub fn should_have_error_message_with_substring<A, S>(actual: &A, expected: &[S]) -> Diagnostic
where
    A: ErrorSubject + ?Sized,
    S: AsRef<str>,
{
    let [substring] = expected else {
        return Diagnostic::fail(format!(
            "Expected exactly 1 value for expected but got '{}'",
            expected.len()
        ));
    };
    let Some(error) = actual.error() else {
        return Diagnostic::fail("Expected error to not be nil but got '<nil>'");
    };
    if substring.as_ref().is_empty() {
        return Diagnostic::fail("Expected message to be non-empty but got ''");
    }
    should_contain_substring(&error.to_string(), &[substring.as_ref()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::{Assertion, all};
    use pretty_assertions::assert_eq;
    use testutils_domain::DomainError;

    fn err(message: &str) -> Option<DomainError> {
        Some(DomainError::InvalidConfig(message.to_string()))
    }

    #[test]
    fn test_wrong_arity() {
        let diagnostic = should_have_error_message_with_substring(&err("foo"), &["bar", "baz"]);
        assert_eq!(
            diagnostic.message(),
            "Expected exactly 1 value for expected but got '2'"
        );
        let empty: [&str; 0] = [];
        assert!(should_have_error_message_with_substring(&err("foo"), &empty).is_failure());
    }

    #[test]
    fn test_missing_error() {
        let none: Option<DomainError> = None;
        assert!(should_have_error_message_with_substring(&none, &["foobar"]).is_failure());

        let ok: Result<u8, DomainError> = Ok(1);
        assert_eq!(
            should_have_error_message_with_substring(&ok, &["foobar"]).message(),
            "Expected error to not be nil but got '<nil>'"
        );
    }

    #[test]
    fn test_empty_substring() {
        assert!(should_have_error_message_with_substring(&err("foo"), &[""]).is_failure());
    }

    #[test]
    fn test_substring_mismatch() {
        assert_eq!(
            should_have_error_message_with_substring(&err("foo"), &["bar"]).message(),
            "Expected 'invalid configuration: foo' to contain substring 'bar' (but it didn't)!"
        );
    }

    #[test]
    fn test_substring_match() {
        assert!(should_have_error_message_with_substring(&err("foobar"), &["bar"]).is_pass());

        let result: Result<(), DomainError> = Err(DomainError::InvalidUrl("x".to_string()));
        assert!(should_have_error_message_with_substring(&result, &[String::from("URL")]).is_pass());
    }

    #[test]
    fn test_usable_as_element_assertion() {
        let results: Vec<Result<(), DomainError>> = vec![
            Err(DomainError::InvalidUrl("a".to_string())),
            Err(DomainError::InvalidUrl("b".to_string())),
        ];
        assert!(
            all(should_have_error_message_with_substring)
                .check(&results, &["invalid URL"])
                .is_pass()
        );
    }
}

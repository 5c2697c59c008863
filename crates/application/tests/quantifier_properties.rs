//! Property tests for the quantifier combinators.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use testutils_application::assertions::comparisons::{should_be_greater_than, should_equal};
// `any` collides with proptest's strategy constructor.
use testutils_application::any as any_element;
use testutils_application::{Assertion, all, at_least, at_most, exactly, none};
use testutils_domain::Diagnostic;

fn always_fails(actual: &i64, _: &[i64]) -> Diagnostic {
    Diagnostic::fail(format!("rejected {actual}"))
}

proptest! {
    #[test]
    fn at_least_zero_always_passes(values in prop::collection::vec(any::<i64>(), 0..32), pivot in any::<i64>()) {
        prop_assert!(at_least(0, should_be_greater_than).check(&values, &[pivot]).is_pass());
    }

    #[test]
    fn unreachable_minimum_lists_every_element(values in prop::collection::vec(any::<i64>(), 0..32), extra in 1usize..8) {
        let required = values.len() + extra;
        let verdict = at_least(required, always_fails).check(&values, &[]);
        prop_assert!(verdict.is_failure());

        let (_, failures) = verdict.message().split_once("\nFailures:\n").unwrap();
        let listed = failures.matches("\nrejected ").count();
        prop_assert_eq!(listed, values.len());
    }

    #[test]
    fn all_is_exactly_length(values in prop::collection::vec(0i64..10, 0..32), pivot in 0i64..10) {
        prop_assert_eq!(
            all(should_be_greater_than).check(&values, &[pivot]),
            exactly(values.len(), should_be_greater_than).check(&values, &[pivot])
        );
    }

    #[test]
    fn none_is_exactly_zero(values in prop::collection::vec(0i64..10, 0..32), pivot in 0i64..10) {
        prop_assert_eq!(
            none(should_equal).check(&values, &[pivot]),
            exactly(0, should_equal).check(&values, &[pivot])
        );
    }

    #[test]
    fn any_is_at_least_one(values in prop::collection::vec(0i64..10, 0..32), pivot in 0i64..10) {
        prop_assert_eq!(
            any_element(should_equal).check(&values, &[pivot]),
            at_least(1, should_equal).check(&values, &[pivot])
        );
    }

    #[test]
    fn at_most_never_lists_failures(values in prop::collection::vec(0i64..10, 0..32), required in 0usize..8, pivot in 0i64..10) {
        let verdict = at_most(required, should_be_greater_than).check(&values, &[pivot]);
        prop_assert!(!verdict.message().contains("Failures:"));
    }

    #[test]
    fn plurality_follows_required_count(values in prop::collection::vec(0i64..10, 0..8), required in 0usize..5) {
        // Requirement above the length so the verdict always fails.
        let required = required + values.len() + 1;
        let verdict = at_least(required, should_equal).check(&values, &[100]);
        let phrase = format!("at least {required} passing element, ");
        prop_assert_eq!(verdict.message().contains(&phrase), required == 1);
    }
}

#[test]
fn singular_and_plural_wording() {
    let values = vec![1, 2];
    assert!(
        at_least(1, should_equal)
            .check(&values, &[9])
            .message()
            .contains("at least 1 passing element, but")
    );
    assert!(
        at_most(0, should_be_greater_than)
            .check(&values, &[0])
            .message()
            .contains("at most 0 passing elements, but")
    );
    assert!(
        exactly(3, should_equal)
            .check(&values, &[1])
            .message()
            .contains("exactly 3 passing elements, but")
    );
}

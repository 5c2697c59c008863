//! Quantified collection assertions.
//!
//! A quantifier runs an element assertion over every element of a
//! [`Sequence`], counts how many elements pass, and compares that count
//! against a requirement:
//!
//! | Constructor | Passes when |
//! |---|---|
//! | [`at_least(n, sub)`](at_least) | passing >= n |
//! | [`at_most(n, sub)`](at_most) | passing <= n |
//! | [`exactly(n, sub)`](exactly) | passing == n |
//! | [`all(sub)`](all) | passing == length |
//! | [`none(sub)`](none) | passing == 0 |
//! | [`any(sub)`](any) | passing >= 1 |
//!
//! Failure messages list the element failures only when they explain the
//! verdict, i.e. when too few elements passed. An at-most verdict never
//! lists them.

use std::fmt;

use testutils_domain::Diagnostic;

use super::assertion::Assertion;
use super::sequence::Sequence;
use crate::error::AssertionError;

/// Result of running an element assertion over a whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of elements in the collection.
    pub total: usize,
    /// Number of elements whose assertion passed.
    pub passing: usize,
    /// Failure messages of the failing elements, in index order.
    pub failures: Vec<String>,
}

/// Runs `assertion` on every element of `collection` in index order.
///
/// `expected` is forwarded unchanged to each invocation. Failure messages
/// are collected in element order; structured diagnostics contribute their
/// human-readable message only.
///
/// # Errors
///
/// Returns [`AssertionError::NotACollection`] if `collection` turns out not
/// to be an ordered sequence.
pub fn count_passing_elements<C, E, S>(
    assertion: &S,
    collection: &C,
    expected: &[E],
) -> Result<Tally, AssertionError>
where
    C: Sequence + ?Sized,
    S: Assertion<C::Item, E> + ?Sized,
{
    let mut tally = Tally::default();
    for (index, element) in collection.try_elements()?.enumerate() {
        tally.total += 1;
        let diagnostic = assertion.check(element, expected);
        if diagnostic.is_pass() {
            tracing::trace!(index, "element passed");
            tally.passing += 1;
        } else {
            tracing::trace!(index, failure = diagnostic.message(), "element failed");
            tally.failures.push(diagnostic.into_message());
        }
    }
    Ok(tally)
}

/// Count requirement enforced by a [`Quantified`] assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// At least this many elements must pass.
    AtLeast(usize),
    /// No more than this many elements may pass.
    AtMost(usize),
    /// Exactly this many elements must pass.
    Exactly(usize),
    /// Every element must pass.
    All,
}

impl Quantifier {
    /// Returns the required count for a collection of `total` elements.
    #[must_use]
    pub const fn required(self, total: usize) -> usize {
        match self {
            Self::AtLeast(n) | Self::AtMost(n) | Self::Exactly(n) => n,
            Self::All => total,
        }
    }

    /// Turns a tally into a verdict.
    #[must_use]
    pub fn evaluate(self, tally: &Tally) -> Diagnostic {
        let required = self.required(tally.total);
        let passing = tally.passing;
        match self {
            Self::AtLeast(_) if passing < required => Diagnostic::fail(format!(
                "{}{}",
                headline("at least", tally, required),
                failure_section(&tally.failures)
            )),
            Self::AtMost(_) if passing > required => {
                Diagnostic::fail(headline("at most", tally, required))
            }
            Self::Exactly(_) | Self::All if passing != required => {
                let mut message = headline("exactly", tally, required);
                if passing < required {
                    message.push_str(&failure_section(&tally.failures));
                }
                Diagnostic::fail(message)
            }
            _ => Diagnostic::pass(),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::AtMost(n) => write!(f, "at most {n}"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::All => f.write_str("all"),
        }
    }
}

fn headline(bound: &str, tally: &Tally, required: usize) -> String {
    format!(
        "Expected the collection (length {}) to contain {bound} {required} passing {}, but it contained {}.",
        tally.total,
        pluralize(required, "element"),
        tally.passing
    )
}

fn failure_section(failures: &[String]) -> String {
    let mut section = String::from("\nFailures:\n");
    for failure in failures {
        section.push('\n');
        section.push_str(failure);
    }
    section
}

// Plurality follows the required count, not the observed one.
fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// An element assertion lifted to a whole collection.
///
/// Built by [`at_least`], [`at_most`], [`exactly`], [`all`], [`none`] and
/// [`any`]. It is itself an [`Assertion`] over any [`Sequence`] whose
/// items the inner assertion accepts, so quantifiers can be nested; the
/// expected values are passed through every level unchanged.
#[derive(Clone, Copy)]
pub struct Quantified<S> {
    quantifier: Quantifier,
    sub: S,
}

impl<S> Quantified<S> {
    /// Wraps `sub` with the given quantifier.
    #[must_use]
    pub const fn new(quantifier: Quantifier, sub: S) -> Self {
        Self { quantifier, sub }
    }

    /// Returns the count requirement.
    #[must_use]
    pub const fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// Returns the wrapped element assertion.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.sub
    }
}

impl<S> fmt::Debug for Quantified<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantified")
            .field("quantifier", &self.quantifier)
            .finish_non_exhaustive()
    }
}

impl<C, E, S> Assertion<C, E> for Quantified<S>
where
    C: Sequence + ?Sized,
    S: Assertion<C::Item, E>,
{
    fn check(&self, collection: &C, expected: &[E]) -> Diagnostic {
        let tally = match count_passing_elements(&self.sub, collection, expected) {
            Ok(tally) => tally,
            Err(err) => {
                tracing::debug!(quantifier = %self.quantifier, error = %err, "collection rejected");
                return Diagnostic::fail(err.to_string());
            }
        };
        let verdict = self.quantifier.evaluate(&tally);
        if verdict.is_failure() {
            tracing::debug!(
                quantifier = %self.quantifier,
                total = tally.total,
                passing = tally.passing,
                "quantified assertion failed"
            );
        }
        verdict
    }
}

/// Passes when at least `required` elements pass `sub`.
#[must_use]
pub const fn at_least<S>(required: usize, sub: S) -> Quantified<S> {
    Quantified::new(Quantifier::AtLeast(required), sub)
}

/// Passes when no more than `required` elements pass `sub`.
#[must_use]
pub const fn at_most<S>(required: usize, sub: S) -> Quantified<S> {
    Quantified::new(Quantifier::AtMost(required), sub)
}

/// Passes when exactly `required` elements pass `sub`.
#[must_use]
pub const fn exactly<S>(required: usize, sub: S) -> Quantified<S> {
    Quantified::new(Quantifier::Exactly(required), sub)
}

/// Passes when every element passes `sub`.
#[must_use]
pub const fn all<S>(sub: S) -> Quantified<S> {
    Quantified::new(Quantifier::All, sub)
}

/// Passes when no element passes `sub`.
#[must_use]
pub const fn none<S>(sub: S) -> Quantified<S> {
    exactly(0, sub)
}

/// Passes when at least one element passes `sub`.
#[must_use]
pub const fn any<S>(sub: S) -> Quantified<S> {
    at_least(1, sub)
}

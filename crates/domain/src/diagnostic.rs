//! Assertion diagnostics.
//!
//! Every assertion in this workspace reports its verdict as a [`Diagnostic`].
//! An empty message means the assertion passed; anything else is a failure
//! whose message is meant to be read by a human.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of a single assertion.
///
/// A diagnostic either passes (empty message) or fails with a human-readable
/// message. Comparisons that know the values they compared may also attach
/// the rendered `expected` and `actual` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable failure message; empty on success.
    #[serde(rename = "Message")]
    message: String,
    /// Rendered expected value, if the assertion recorded one.
    #[serde(rename = "Expected", default, skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    /// Rendered actual value, if the assertion recorded one.
    #[serde(rename = "Actual", default, skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
}

impl Diagnostic {
    /// Creates a passing diagnostic.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            message: String::new(),
            expected: None,
            actual: None,
        }
    }

    /// Creates a plain failing diagnostic.
    ///
    /// An empty message produces a passing diagnostic.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Creates a failing diagnostic that also records the compared values.
    #[must_use]
    pub fn structured(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Normalizes a raw diagnostic string.
    ///
    /// Some predicates render their failure as a JSON payload of the form
    /// `{"Message": "...", "Expected": "...", "Actual": "..."}` while others
    /// emit plain text. A JSON object with a non-empty string `Message` is
    /// unpacked into a structured diagnostic; field names match regardless
    /// of case. Any other input, including malformed JSON, is kept verbatim
    /// as the message.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim_start().starts_with('{')
            && let Some(payload) = LegacyPayload::parse(&raw)
            && !payload.message.is_empty()
        {
            return Self {
                message: payload.message,
                expected: payload.expected,
                actual: payload.actual,
            };
        }
        Self::fail(raw)
    }

    /// Returns true if the assertion passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.message.is_empty()
    }

    /// Returns true if the assertion failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_pass()
    }

    /// Returns the human-readable message (empty on success).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rendered expected value, if any.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Returns the rendered actual value, if any.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Consumes the diagnostic and returns its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }

    /// Converts the diagnostic into a `Result`, failing with itself.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic when it carries a failure message.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_pass() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Diagnostic {}

impl From<String> for Diagnostic {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl From<&str> for Diagnostic {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

/// Wire shape of structured diagnostics produced by string-based predicates.
#[derive(Deserialize)]
struct LegacyPayload {
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Expected", default)]
    expected: Option<String>,
    #[serde(rename = "Actual", default)]
    actual: Option<String>,
}

impl LegacyPayload {
    const FIELDS: [&'static str; 3] = ["Message", "Expected", "Actual"];

    /// Field names are matched case-insensitively; on duplicates the last one wins.
    fn parse(raw: &str) -> Option<Self> {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(raw) else {
            return None;
        };
        let fields: Map<String, Value> = fields
            .into_iter()
            .filter_map(|(name, value)| {
                Self::FIELDS
                    .into_iter()
                    .find(|known| known.eq_ignore_ascii_case(&name))
                    .map(|known| (known.to_string(), value))
            })
            .collect();
        serde_json::from_value(Value::Object(fields)).ok()
    }
}

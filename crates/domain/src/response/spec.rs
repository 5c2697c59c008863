//! Response specification type

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::{Header, Headers};

/// HTTP response specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    #[serde(default)]
    pub headers: Headers,
    /// Response body as string
    #[serde(default)]
    pub body: String,
    /// Response time
    #[serde(with = "duration_millis", default)]
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates an empty response with the given status code.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: String::new(),
            duration: Duration::ZERO,
        }
    }

    /// Creates a `200 OK` response with the given body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200).with_body(body)
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the measured response time.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the status code indicates a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns true if the status code indicates a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Default for ResponseSpec {
    fn default() -> Self {
        Self::new(200)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Truncation is acceptable: durations over ~584 million years are not realistic
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_checks() {
        assert!(ResponseSpec::new(204).is_success());
        assert!(ResponseSpec::new(404).is_client_error());
        assert!(!ResponseSpec::new(404).is_success());
        assert!(ResponseSpec::new(503).is_server_error());
    }

    #[test]
    fn test_builder_helpers() {
        let response = ResponseSpec::ok("pong")
            .with_header("Content-Type", "text/plain")
            .with_duration(Duration::from_millis(12));
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "pong");
        assert_eq!(response.header("content-type"), Some("text/plain"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let response: ResponseSpec = serde_json::from_str(r#"{"status": 201}"#).unwrap();
        assert_eq!(response, ResponseSpec::new(201));
    }
}

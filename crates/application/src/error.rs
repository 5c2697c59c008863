//! Application error types

use thiserror::Error;
use testutils_domain::DomainError;

/// Errors raised by the assertion engine before any verdict is reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// The value handed to a quantifier is not an ordered sequence.
    #[error("The collection is not a valid sequence (found {found}).")]
    NotACollection {
        /// Kind of value that was found instead.
        found: &'static str,
    },
}

/// Errors reported by implementations of the `HttpClient` port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured redirect limit.
        max: usize,
    },

    /// The request body could not be sent.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Result type returned by `HttpClient` operations.
pub type HttpResult<T> = Result<T, HttpClientError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The assertion engine rejected its input.
    #[error("assertion error: {0}")]
    Assertion(#[from] AssertionError),

    /// An HTTP client could not be built or a request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_a_collection_message() {
        let err = AssertionError::NotACollection {
            found: "JSON object",
        };
        assert_eq!(
            err.to_string(),
            "The collection is not a valid sequence (found JSON object)."
        );
    }

    #[test]
    fn test_application_error_wraps_layers() {
        let err: ApplicationError = DomainError::InvalidConfig("timeout_ms".to_string()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));

        let err: ApplicationError = HttpClientError::Timeout { timeout_ms: 5 }.into();
        assert_eq!(err.to_string(), "HTTP error: request timed out after 5ms");
    }
}

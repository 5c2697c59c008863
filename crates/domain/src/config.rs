//! HTTP client configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Settings applied when building a real HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of redirects to follow (0 disables redirects).
    pub max_redirects: usize,
}

impl HttpClientConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Default redirect limit.
    pub const DEFAULT_MAX_REDIRECTS: usize = 10;

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the redirect limit.
    #[must_use]
    pub const fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Checks that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if the user agent is blank or
    /// the timeout is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.user_agent.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "user_agent must not be empty".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(DomainError::InvalidConfig(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("testutils/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            max_redirects: Self::DEFAULT_MAX_REDIRECTS,
        }
    }
}

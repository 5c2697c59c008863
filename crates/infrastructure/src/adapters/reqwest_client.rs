//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It is the production counterpart of the `StubClient` test double.

use std::time::{Duration, Instant};

use reqwest::{Client, Method};
use testutils_application::{ApplicationResult, HttpClient, HttpClientError, HttpResult};
use testutils_domain::{Header, Headers, HttpClientConfig, HttpMethod, RequestSpec, ResponseSpec};

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout_ms: u64,
    max_redirects: usize,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// See [`HttpClientConfig::default`] for the values used.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> ApplicationResult<Self> {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Creates a new HTTP client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configuration is invalid, or an HTTP
    /// error if reqwest cannot build the client.
    pub fn with_config(config: &HttpClientConfig) -> ApplicationResult<Self> {
        config.validate()?;

        let redirect = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects)
        };
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(redirect)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms,
            max_redirects: config.max_redirects,
        })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: self.timeout_ms,
            };
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        if error.is_connect() {
            let message = error.to_string();
            let lower = message.to_lowercase();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                let port = error
                    .url()
                    .and_then(reqwest::Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_body() || error.is_request() {
            return HttpClientError::InvalidBody(error.to_string());
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> HttpResult<ResponseSpec> {
        let url = request
            .parse_url()
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        tracing::debug!(method = %request.method, %url, "sending request");
        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        for header in request.headers.iter() {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| Header::new(name.as_str(), value.to_str().unwrap_or("<binary>")))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?;
        let duration = start.elapsed();

        tracing::debug!(status, elapsed = ?duration, "request completed");

        Ok(ResponseSpec {
            status,
            headers,
            body,
            duration,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use testutils_application::ApplicationError;
    use testutils_domain::DomainError;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Head),
            Method::HEAD
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new().unwrap();
        assert_eq!(client.timeout_ms, HttpClientConfig::DEFAULT_TIMEOUT_MS);
        assert_eq!(client.max_redirects, HttpClientConfig::DEFAULT_MAX_REDIRECTS);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = HttpClientConfig::default().with_timeout_ms(0);
        let result = ReqwestHttpClient::with_config(&config);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidConfig(_)))
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_sending() {
        let client = ReqwestHttpClient::new().unwrap();
        let result = client.get("not a url").await;
        assert!(matches!(result, Err(HttpClientError::InvalidUrl(_))));
    }
}

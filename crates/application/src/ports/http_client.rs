//! HTTP Client port

use std::future::Future;

use testutils_domain::{RequestSpec, ResponseSpec};

use crate::error::HttpResult;

/// Port for executing HTTP requests.
///
/// Code under test depends on this trait rather than on a concrete HTTP
/// library, so tests can substitute a deterministic stub. Only
/// [`HttpClient::execute`] is required; the convenience verbs build a
/// [`RequestSpec`] and delegate to it.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other HTTP-related problems.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = HttpResult<ResponseSpec>> + Send;

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::execute`].
    fn get(&self, url: &str) -> impl Future<Output = HttpResult<ResponseSpec>> + Send {
        let request = RequestSpec::get(url);
        async move { self.execute(&request).await }
    }

    /// Issues a HEAD request.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::execute`].
    fn head(&self, url: &str) -> impl Future<Output = HttpResult<ResponseSpec>> + Send {
        let request = RequestSpec::head(url);
        async move { self.execute(&request).await }
    }

    /// Issues a POST request with a body of the given content type.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::execute`].
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> impl Future<Output = HttpResult<ResponseSpec>> + Send {
        let request = RequestSpec::post(url, content_type, body);
        async move { self.execute(&request).await }
    }
}

//! Queue-replay stub for the `HttpClient` port.
//!
//! A [`StubClient`] is loaded with canned outcomes and hands them out one
//! per call, in order, whichever verb is used. It never touches the network.

use std::collections::VecDeque;
use std::future::Future;

use parking_lot::Mutex;
use testutils_application::{HttpClient, HttpClientError, HttpResult};
use testutils_domain::{HttpMethod, RequestSpec, ResponseSpec};

/// One canned outcome: a response or a transport error.
pub type StubResponse = HttpResult<ResponseSpec>;

/// A request observed by a [`StubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Method of the request.
    pub method: HttpMethod,
    /// Target URL of the request.
    pub url: String,
}

#[derive(Debug, Default)]
struct StubState {
    pending: VecDeque<StubResponse>,
    recorded: Vec<RecordedCall>,
}

/// HTTP client that replays queued outcomes in order.
///
/// Every call to [`HttpClient::execute`], [`HttpClient::get`],
/// [`HttpClient::head`] or [`HttpClient::post`] consumes the next queued
/// outcome; all verbs share one cursor.
///
/// # Panics
///
/// Calling the client after the queue is exhausted panics. Running out of
/// canned responses means the test was set up with fewer responses than the
/// code under test makes requests, and that must fail the test immediately
/// rather than surface as an ordinary error the code might swallow.
#[derive(Debug, Default)]
pub struct StubClient {
    state: Mutex<StubState>,
}

impl StubClient {
    /// Creates a stub that replays `responses` in order.
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = StubResponse>) -> Self {
        Self {
            state: Mutex::new(StubState {
                pending: responses.into_iter().collect(),
                recorded: Vec::new(),
            }),
        }
    }

    /// Queues a successful response.
    #[must_use]
    pub fn respond(mut self, response: ResponseSpec) -> Self {
        self.state.get_mut().pending.push_back(Ok(response));
        self
    }

    /// Queues a transport error.
    #[must_use]
    pub fn fail(mut self, error: HttpClientError) -> Self {
        self.state.get_mut().pending.push_back(Err(error));
        self
    }

    /// Returns how many calls have been made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.state.lock().recorded.len()
    }

    /// Returns how many queued outcomes are still unused.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Returns the calls made so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.state.lock().recorded.clone()
    }

    #[allow(clippy::panic)]
    fn next(&self, request: &RequestSpec) -> StubResponse {
        let mut state = self.state.lock();
        state.recorded.push(RecordedCall {
            method: request.method,
            url: request.url.clone(),
        });
        let call = state.recorded.len();
        if let Some(outcome) = state.pending.pop_front() {
            tracing::debug!(
                call,
                method = %request.method,
                url = %request.url,
                ok = outcome.is_ok(),
                "replaying stubbed response"
            );
            return outcome;
        }
        drop(state);
        panic!(
            "StubClient exhausted: call #{call} ({} {}) but only {} response(s) were queued",
            request.method,
            request.url,
            call - 1
        );
    }
}

impl HttpClient for StubClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = HttpResult<ResponseSpec>> + Send {
        // Consume at call time so an exhausted queue fails where the call is made.
        std::future::ready(self.next(request))
    }
}

//! End-to-end use of the stub client with the collection assertions.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use testutils_application::assertions::comparisons::{should_be_less_than, should_equal};
use testutils_application::{
    Assertion, HttpClient, HttpClientError, HttpResult, all, any, at_most, none,
    should_have_error_message_with_substring,
};
use testutils_domain::{HttpMethod, ResponseSpec};
use testutils_infrastructure::{RecordedCall, StubClient};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Probes every endpoint in turn and returns what each call produced.
async fn probe<C: HttpClient>(client: &C, urls: &[&str]) -> Vec<HttpResult<ResponseSpec>> {
    let mut outcomes = Vec::with_capacity(urls.len());
    for url in urls {
        outcomes.push(client.get(url).await);
    }
    outcomes
}

fn statuses(outcomes: &[HttpResult<ResponseSpec>]) -> Vec<u16> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().ok().map(|response| response.status))
        .collect()
}

#[tokio::test]
async fn test_probe_results_are_checked_with_quantifiers() {
    init_tracing();
    let client = StubClient::new([
        Ok(ResponseSpec::ok("up")),
        Ok(ResponseSpec::new(503).with_body("down")),
        Err(HttpClientError::Timeout { timeout_ms: 250 }),
        Ok(ResponseSpec::ok("up")),
    ]);

    let outcomes = probe(
        &client,
        &["http://a/health", "http://b/health", "http://c/health", "http://d/health"],
    )
    .await;

    let codes = statuses(&outcomes);
    assert_eq!(codes, vec![200, 503, 200]);
    assert!(at_most(1, should_be_less_than).check(&codes, &[500_u16]).is_failure());
    assert!(any(should_equal).check(&codes, &[503_u16]).is_pass());
    assert_eq!(
        all(should_be_less_than).check(&codes, &[500_u16]).message(),
        "Expected the collection (length 3) to contain exactly 3 passing elements, but it contained 2.\nFailures:\n\nExpected '503' to be less than '500' (but it wasn't)!"
    );

    assert!(
        any(should_have_error_message_with_substring)
            .check(&outcomes, &["timed out after 250ms"])
            .is_pass()
    );
    assert!(none(should_have_error_message_with_substring).check(&outcomes, &["DNS"]).is_pass());
}

#[tokio::test]
async fn test_calls_are_recorded_in_order() {
    init_tracing();
    let client = StubClient::default()
        .respond(ResponseSpec::ok("a"))
        .respond(ResponseSpec::ok("b"));

    let _ = probe(&client, &["http://svc/first", "http://svc/second"]).await;

    assert_eq!(client.calls(), 2);
    assert_eq!(client.remaining(), 0);
    assert_eq!(
        client.recorded().last(),
        Some(&RecordedCall {
            method: HttpMethod::Get,
            url: "http://svc/second".to_string(),
        })
    );
}

#[tokio::test]
#[should_panic(expected = "StubClient exhausted: call #3")]
async fn test_probe_beyond_queue_panics() {
    init_tracing();
    let client = StubClient::new([Ok(ResponseSpec::ok("1")), Ok(ResponseSpec::ok("2"))]);
    let _ = probe(&client, &["http://x/1", "http://x/2", "http://x/3"]).await;
}

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use igdb::{ApiKey, BaseUrl, IgdbClient, IgdbConfig};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "test-user-key";

/// Creates a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> IgdbClient {
    let config = IgdbConfig::builder()
        .api_key(ApiKey::new(TEST_KEY).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    IgdbClient::new(&config).unwrap()
}

/// Starts a server answering every authenticated GET with `status` and `body`.
pub async fn serve(status: u16, body: &str) -> (MockServer, IgdbClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    let client = client_for(&server);
    (server, client)
}

/// Starts a server that fails the test if it receives any request.
pub async fn unreachable() -> (MockServer, IgdbClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    (server, client)
}

/// Returns the decoded query pairs of the single request the server received.
pub async fn received_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

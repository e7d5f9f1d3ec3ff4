//! Shared helpers for the WireMock integration tests.

#![allow(dead_code)]

use integrations_gitee::GiteeClient;
use wiremock::{MockServer, ResponseTemplate};

/// Token used by authenticated test clients.
pub const TEST_TOKEN: &str = "test-token";

/// Starts a fresh mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Full mock path for an API path.
pub fn api_path(path: &str) -> String {
    format!("/api/v5/{}", path)
}

/// Client authenticated with the `access_token` query parameter.
pub fn client_for(server: &MockServer) -> GiteeClient {
    GiteeClient::builder()
        .base_url(format!("{}/api/v5", server.uri()))
        .access_token(TEST_TOKEN)
        .build()
        .expect("Failed to build client")
}

/// Client without credentials.
pub fn anonymous_client(server: &MockServer) -> GiteeClient {
    GiteeClient::builder()
        .base_url(format!("{}/api/v5", server.uri()))
        .build()
        .expect("Failed to build client")
}

/// JSON success response.
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// JSON error response.
pub fn error_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

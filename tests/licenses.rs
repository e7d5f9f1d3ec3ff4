//! Integration tests for license endpoints.

mod common;

use common::*;
use bytes::Bytes;
use integrations_gitee::{ErrorCategory, GiteeErrorKind};
use reqwest::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const MIT_TEXT: &str = "MIT License\n\nCopyright (c) [year] [fullname]\n\n{\"not\": json}\n";

#[tokio::test]
async fn test_get_raw_returns_text_verbatim() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(api_path("licenses/MIT/raw")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain; charset=utf-8")
                .set_body_string(MIT_TEXT),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let response = client.licenses().get_raw("MIT").await.unwrap();

    assert_eq!(response.meta.status, 200);
    assert_eq!(response.value, MIT_TEXT);
}

#[tokio::test]
async fn test_list_licenses() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(api_path("licenses")))
        .respond_with(success_response(json!(["MIT", "Apache-2.0", "MulanPSL-2.0"])))
        .mount(&server)
        .await;

    let licenses = anonymous_client(&server).licenses().list().await.unwrap();

    assert_eq!(licenses.value, vec!["MIT", "Apache-2.0", "MulanPSL-2.0"]);
}

#[tokio::test]
async fn test_get_license() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(api_path("licenses/MIT")))
        .respond_with(success_response(json!({ "license": "MIT", "source": MIT_TEXT })))
        .mount(&server)
        .await;

    let license = anonymous_client(&server).licenses().get("MIT").await.unwrap();

    assert_eq!(license.value.license.as_deref(), Some("MIT"));
    assert_eq!(license.value.source.as_deref(), Some(MIT_TEXT));
}

#[tokio::test]
async fn test_repository_license_sends_access_token() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(api_path("repos/mamh-mixed/go-gitee/license")))
        .and(query_param("access_token", TEST_TOKEN))
        .respond_with(success_response(json!({ "license": "MIT" })))
        .mount(&server)
        .await;

    let license = client_for(&server)
        .licenses()
        .repository_license("mamh-mixed", "go-gitee")
        .await
        .unwrap();

    assert_eq!(license.value.license.as_deref(), Some("MIT"));
}

#[tokio::test]
async fn test_not_found_carries_status_and_payload() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(api_path("licenses/NOPE")))
        .respond_with(error_response(404, json!({ "message": "Not Found License" })))
        .mount(&server)
        .await;

    let err = anonymous_client(&server)
        .licenses()
        .get("NOPE")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), GiteeErrorKind::NotFound);
    assert_eq!(err.category(), ErrorCategory::Api);
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(
        err.body().and_then(|b| b.message.as_deref()),
        Some("Not Found License")
    );
    assert_eq!(err.response().map(|m| m.status), Some(404));
}

#[tokio::test]
async fn test_empty_license_is_rejected_before_sending() {
    let server = setup_mock_server().await;
    let client = anonymous_client(&server);

    let err = client.licenses().get("").await.unwrap_err();
    assert_eq!(err.kind(), GiteeErrorKind::MissingParameter);
    assert_eq!(err.category(), ErrorCategory::Request);

    let err = client
        .licenses()
        .repository_license("owner", "")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), GiteeErrorKind::MissingParameter);

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_execute_raw_returns_bytes_verbatim() {
    let server = setup_mock_server().await;
    let payload: Vec<u8> = vec![0xff, 0xfe, 0x00, b'M', b'I', b'T', 0x80];

    Mock::given(method("GET"))
        .and(path(api_path("licenses/MIT/raw")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(payload.clone()),
        )
        .mount(&server)
        .await;

    let client = anonymous_client(&server);

    let request = client
        .new_request(Method::GET, "licenses/MIT/raw", None::<&()>)
        .unwrap();
    let response = client.execute_raw(request).await.unwrap();
    assert_eq!(response.meta.status, 200);
    assert_eq!(response.value, Bytes::from(payload));

    let err = client.licenses().get_raw("MIT").await.unwrap_err();
    assert_eq!(err.kind(), GiteeErrorKind::DeserializationError);
    assert_eq!(err.status_code(), Some(200));
}

//! Integration tests for PlatformClient.
//!
//! Uses wiremock for HTTP mocking. Tests cover run_tests decoding,
//! auth headers, and status mapping (401/404/5xx/invalid body).

use strata_api::{ApiConfig, ApiError, PlatformClient, TestService};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn create_test_client(mock_server: &MockServer) -> PlatformClient {
    let config = ApiConfig::default()
        .with_url(mock_server.uri())
        .with_token("test-token");
    PlatformClient::new(config).expect("failed to create client")
}

fn sample_response() -> serde_json::Value {
    serde_json::json!({
        "numberRun": 2,
        "numberFailures": 1,
        "log": "12:00:01 EXECUTE_ANONYMOUS",
        "name": ["AccountService"],
        "numberLocations": [20],
        "numberLocationsNotCovered": [5],
        "successClassNames": ["AccountTest"],
        "successMethodNames": ["testInsert"],
        "failureClassNames": ["AccountTest"],
        "failureMethodNames": ["testDelete"],
        "failureMessages": ["System.AssertException: expected 1, got 0"],
        "failureStackTraces": ["Class.AccountTest.testDelete: line 42"]
    })
}

#[tokio::test]
async fn test_run_tests_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(serde_json::json!({
            "tests": ["AccountTest.testInsert", "AccountTest.testDelete"],
            "namespace": "acme"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let tests = vec![
        "AccountTest.testInsert".to_string(),
        "AccountTest.testDelete".to_string(),
    ];
    let coverage = client.run_tests(&tests, "acme").await.expect("run failed");

    assert_eq!(coverage.number_run, 2);
    assert_eq!(coverage.number_failures, 1);
    assert_eq!(coverage.coverage.len(), 1);
    assert_eq!(coverage.coverage[0].percent(), "75%");
    assert_eq!(coverage.passed[0].method_name, "testInsert");
    assert_eq!(coverage.failed[0].message, "System.AssertException: expected 1, got 0");
    assert!(!coverage.all_passed());
}

#[tokio::test]
async fn test_run_tests_empty_namespace_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .and(body_json(serde_json::json!({ "tests": ["all"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "numberRun": 1,
            "numberFailures": 0
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let coverage = client
        .run_tests(&["all".to_string()], "")
        .await
        .expect("run failed");

    assert_eq!(coverage.number_run, 1);
    assert!(coverage.all_passed());
}

#[tokio::test]
async fn test_run_tests_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let result = client.run_tests(&["AccountTest".to_string()], "").await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_run_tests_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let result = client.run_tests(&["AccountTest".to_string()], "").await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn test_run_tests_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let result = client.run_tests(&["AccountTest".to_string()], "").await;

    match result {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Server error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_run_tests_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    let result = client.run_tests(&["AccountTest".to_string()], "").await;

    assert!(matches!(result, Err(ApiError::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tests/run"))
        .and(header("user-agent", strata_api::API_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "numberRun": 1,
            "numberFailures": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server).await;
    client
        .run_tests(&["AccountTest".to_string()], "")
        .await
        .expect("run failed");
}

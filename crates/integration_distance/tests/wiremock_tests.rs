//! Integration tests for the Distance Matrix client (wiremock-based)

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_distance::{
    DistanceMatrixClient, DistanceMatrixConfig, DistanceMatrixError, GoogleDistanceMatrixClient,
};

const MATRIX_PATH: &str = "/maps/api/distancematrix/json";

fn config_for_mock(base_url: &str) -> DistanceMatrixConfig {
    DistanceMatrixConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 2,
        ..DistanceMatrixConfig::default()
    }
}

const fn sample_matrix_json() -> &'static str {
    r#"{
        "destination_addresses": ["Lisbon, Portugal"],
        "origin_addresses": ["Berlin, Germany"],
        "rows": [{
            "elements": [{
                "distance": { "text": "2,789 km", "value": 2789061 },
                "duration": { "text": "23 days 4 hours", "value": 2002345 },
                "status": "OK"
            }]
        }],
        "status": "OK"
    }"#
}

#[tokio::test]
async fn test_route_success_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .and(query_param("origins", "Berlin, Germany"))
        .and(query_param("destinations", "38.72,-9.14"))
        .and(query_param("units", "metric"))
        .and(query_param("mode", "walking"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_matrix_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleDistanceMatrixClient::new(&config_for_mock(&server.uri())).unwrap();

    let route = client.route("Berlin, Germany", "38.72,-9.14").await.unwrap();
    assert!((route.meters - 2_789_061.0).abs() < 1e-9);
    assert_eq!(route.text, "2,789 km");
    assert_eq!(route.duration_seconds, Some(2_002_345.0));
}

#[tokio::test]
async fn test_route_forbidden_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = GoogleDistanceMatrixClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::Unauthorized(_)));
}

#[tokio::test]
async fn test_route_request_denied_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"error_message": "The provided API key is invalid.", "rows": [], "status": "REQUEST_DENIED"}"#,
        ))
        .mount(&server)
        .await;

    let client = GoogleDistanceMatrixClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::Unauthorized(_)));
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = GoogleDistanceMatrixClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::RequestFailed { status: 503 }));
}

#[tokio::test]
async fn test_route_zero_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"origin_addresses": ["Berlin"], "destination_addresses": ["Honolulu"],
                "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}], "status": "OK"}"#,
        ))
        .mount(&server)
        .await;

    let client = GoogleDistanceMatrixClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.route("Berlin", "Honolulu").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::NoRoute { ref status } if status == "ZERO_RESULTS"));
}

#[tokio::test]
async fn test_route_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MATRIX_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_matrix_json())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = DistanceMatrixConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = GoogleDistanceMatrixClient::new(&config).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_matrix_json()))
        .expect(0)
        .mount(&server)
        .await;

    let config = DistanceMatrixConfig {
        api_key: None,
        ..config_for_mock(&server.uri())
    };
    let client = GoogleDistanceMatrixClient::new(&config).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::MissingApiKey));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = config_for_mock("http://127.0.0.1:1");
    let client = GoogleDistanceMatrixClient::new(&config).unwrap();

    let err = client.route("A", "B").await.unwrap_err();
    assert!(matches!(err, DistanceMatrixError::ConnectionFailed(_)));
}

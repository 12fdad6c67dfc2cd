//! Integration tests for ScanClient against a mock scanning backend
//!
//! These tests cover the full scan path:
//! - Local rejections (empty input, invalid format) make no network call
//! - Result rendering in the fixed template order
//! - Backend `error` records, transport failures and non-success statuses

use sentinel_scan::{Config, FailureKind, ScanClient, ScanError};
use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a client pointed at the mock server
fn create_test_client(server: &MockServer) -> ScanClient {
    let config = Config {
        base_url: url::Url::parse(&server.uri()).expect("mock server URI"),
        timeout_seconds: Some(5),
        user_agent: "sentinel_scan_test/1.0".to_string(),
        ..Default::default()
    };
    ScanClient::new(&config).expect("Failed to create scan client")
}

/// Helper function returning the canonical success body
fn success_body() -> serde_json::Value {
    json!({
        "domain": "example.com",
        "trust_status": "trusted",
        "url_type": "generic",
        "risk_level": "low",
        "risk_score": 1,
        "verdict": "safe",
        "whois_summary": "Registrar: Example Registrar",
        "dns_summary": "A: 93.184.216.34",
        "reachable": true
    })
}

/// Mounts a catch-all mock that fails verification if any request arrives
async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_empty_input_makes_no_network_call() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;
    let client = create_test_client(&server);

    assert_eq!(client.scan("").await, "Please enter a URL.");
    assert_eq!(client.scan("   \n\t").await, "Please enter a URL.");

    server.verify().await;
}

#[tokio::test]
async fn test_invalid_format_makes_no_network_call() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;
    let client = create_test_client(&server);

    for input in ["notaurl", "ht!tp://x.com", "exa mple.com", "example.c"] {
        assert_eq!(
            client.scan(input).await,
            ScanError::InvalidFormat.to_string(),
            "input {input:?} should be rejected locally"
        );
    }

    server.verify().await;
}

#[tokio::test]
async fn test_success_renders_all_fields_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("url", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let text = client.scan("example.com").await;

    let expected_order = [
        "example.com",
        "trusted",
        "generic",
        "low",
        "Risk Score   : 1",
        "Reachability : ✅ Reachable",
        "safe",
        "Registrar: Example Registrar",
        "A: 93.184.216.34",
    ];
    let mut cursor = 0;
    for needle in expected_order {
        let found = text[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing or out of order in:\n{text}"));
        cursor += found + needle.len();
    }
}

#[tokio::test]
async fn test_scheme_is_percent_encoded_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("url", "https://sub.example.co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let report = client
        .try_scan("https://sub.example.co")
        .await
        .expect("scan should succeed");
    assert_eq!(report.domain, "example.com");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("url=https%3A%2F%2Fsub.example.co")
    );
}

#[tokio::test]
async fn test_backend_error_shows_only_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "malformed domain"})),
        )
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let text = client.scan("example.com").await;

    assert!(text.contains("malformed domain"));
    for label in ["Domain", "Trust Status", "Risk Score", "Verdict", "WHOIS", "DNS"] {
        assert!(!text.contains(label), "{label} rendered for an error: {text}");
    }
}

#[tokio::test]
async fn test_transport_failure_shows_connectivity_message() {
    // Bind then drop a listener so nothing answers on the port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let config = Config {
        base_url: url::Url::parse(&format!("http://{addr}")).unwrap(),
        ..Default::default()
    };
    let client = ScanClient::new(&config).unwrap();

    let outcome = client.try_scan("example.com").await;
    assert!(matches!(outcome, Err(ScanError::Connectivity(_))));
    assert_eq!(
        client.scan("example.com").await,
        ScanError::Connectivity(FailureKind::HttpRequestConnectError).to_string()
    );
}

#[tokio::test]
async fn test_non_success_status_is_connectivity_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    assert_eq!(
        client.try_scan("example.com").await,
        Err(ScanError::Connectivity(FailureKind::HttpRequestStatusError))
    );
}

#[tokio::test]
async fn test_scan_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let _ = client.scan("example.com").await;

    server.verify().await;
}

#[tokio::test]
async fn test_same_input_same_response_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(2)
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let first = client.scan("example.com").await;
    let second = client.scan("example.com").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_overlapping_scans_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("url", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scan"))
        .and(query_param("url", "bad.example.org"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Domain does not exist."})),
        )
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let (good, bad) = tokio::join!(
        client.try_scan("example.com"),
        client.try_scan("bad.example.org")
    );

    assert_eq!(good.expect("good scan").domain, "example.com");
    assert_eq!(
        bad,
        Err(ScanError::Backend("Domain does not exist.".to_string()))
    );
}

#[tokio::test]
async fn test_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "running",
            "message": "AI Malicious URL Detector API is live",
            "usage": "/scan?url=https://example.com"
        })))
        .mount(&server)
        .await;
    let client = create_test_client(&server);

    let status = client.service_status().await.expect("status");
    assert_eq!(status.status, "running");
}

//! Tests for the stats API client

use super::*;
use crate::test_utils::test_helpers::{SAMPLE_STATS_JSON, local_client, run_async, serve_once};

#[test]
fn test_endpoint_url_interpolates_username() {
    assert_eq!(
        endpoint_url(DEFAULT_BASE_URL, "alice"),
        "https://leetcode-stats-api.herokuapp.com/alice"
    );
}

#[test]
fn test_endpoint_url_tolerates_trailing_slash() {
    assert_eq!(
        endpoint_url("http://localhost:8080/", "bob_1"),
        "http://localhost:8080/bob_1"
    );
}

#[test]
fn test_fetch_success() {
    let (base_url, requests) = serve_once(200, SAMPLE_STATS_JSON);
    let client = local_client(&base_url);

    let record = run_async(client.fetch("alice")).unwrap();

    assert_eq!(record.total_solved, 323);
    assert_eq!(record.easy.solved, 61);
    assert_eq!(record.hard.total, 741);

    let request_line = requests.recv().unwrap();
    assert!(request_line.starts_with("GET /alice "), "got {}", request_line);
}

#[test]
fn test_fetch_server_error_is_transport() {
    let (base_url, _requests) = serve_once(500, "oops");
    let client = local_client(&base_url);

    let err = run_async(client.fetch("alice")).unwrap_err();

    assert_eq!(
        err,
        FetchError::Transport {
            username: "alice".to_string()
        }
    );
}

#[test]
fn test_fetch_not_retrieved_is_not_found() {
    let (base_url, _requests) = serve_once(
        200,
        r#"{"status": "error", "message": "user does not exist"}"#,
    );
    let client = local_client(&base_url);

    let err = run_async(client.fetch("ghost")).unwrap_err();

    assert_eq!(err, FetchError::NotFound);
}

#[test]
fn test_fetch_connection_refused_is_unexpected() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = local_client(&format!("http://127.0.0.1:{}", port));

    let err = run_async(client.fetch("alice")).unwrap_err();

    assert!(matches!(err, FetchError::Unexpected(_)));
}

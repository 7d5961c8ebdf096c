//! Integration tests for the secret fetcher against a local HTTP server.

use mockito::{Matcher, Server};
use serde_json::json;
use v2file::config::Settings;
use v2file::errors::V2FileError;
use v2file::vault::SecretFetcher;
use zeroize::Zeroizing;

/// Helper: a fetcher pointed at the mock server's `kv` mount.
fn fetcher(server: &Server) -> SecretFetcher {
    let settings =
        Settings::new(&server.url(), "kv", Zeroizing::new("s.test-token".into())).unwrap();
    SecretFetcher::new(&settings)
}

#[test]
fn get_returns_data_mapping() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/kv/data/myapp")
        .match_header("x-vault-token", "s.test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"lease_id": "", "data": {"a": "1", "b": "2"}}).to_string())
        .create();

    let data = fetcher(&server).get("myapp").unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["a"], "1");
    assert_eq!(data["b"], "2");
    mock.assert();
}

#[test]
fn get_supports_nested_paths() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/kv/data/team/app/prod")
        .with_status(200)
        .with_body(r#"{"data":{"x":"y"}}"#)
        .create();

    let data = fetcher(&server).get("team/app/prod").unwrap();
    assert_eq!(data["x"], "y");
    mock.assert();
}

#[test]
fn get_without_token_header_is_not_matched() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/kv/data/myapp")
        .match_header("x-vault-token", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"data":{}}"#)
        .expect(0)
        .create();

    // The request is sent with the header, finds no matching mock, and
    // mockito answers 501.
    match fetcher(&server).get("myapp") {
        Err(V2FileError::UnexpectedStatus(status)) => assert!(status.starts_with("501")),
        other => panic!("expected a status error, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn not_found_status_is_reported() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/kv/data/missing")
        .with_status(404)
        .with_body(r#"{"errors":[]}"#)
        .create();

    match fetcher(&server).get("missing") {
        Err(V2FileError::UnexpectedStatus(status)) => assert_eq!(status, "404 Not Found"),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn permission_denied_status_is_reported() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/kv/data/locked")
        .with_status(403)
        .with_body(r#"{"errors":["permission denied"]}"#)
        .create();

    let err = fetcher(&server).get("locked").unwrap_err();
    assert_eq!(err.to_string(), "invalid response status: 403 Forbidden");
}

#[test]
fn malformed_body_is_a_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/kv/data/broken")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let result = fetcher(&server).get("broken");
    assert!(matches!(result, Err(V2FileError::Decode(_))));
}

#[test]
fn body_without_data_is_a_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/kv/data/empty")
        .with_status(200)
        .with_body(r#"{"warnings":["no data"]}"#)
        .create();

    let result = fetcher(&server).get("empty");
    assert!(matches!(result, Err(V2FileError::Decode(_))));
}

#[test]
fn empty_path_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .expect(0)
        .create();

    let result = fetcher(&server).get("");
    assert!(matches!(result, Err(V2FileError::InvalidRequest(_))));
    mock.assert();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Port 1 is reserved and nothing listens on it in test environments.
    let settings =
        Settings::new("http://127.0.0.1:1", "kv", Zeroizing::new("t".into())).unwrap();
    let result = SecretFetcher::new(&settings).get("myapp");
    assert!(matches!(result, Err(V2FileError::Transport(_))));
}

//! Blocking JSON GET against a local mock server.
//!
//! The mock server runs on its own thread; the runtime here is only used
//! to start it and mount expectations, never around `get_json`.

use citeline_core::{ApiError, get_json, http_client};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Payload {
    count: u32,
}

fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
}

#[test]
fn get_json_decodes_success_body() {
    let rt = test_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("page[size]", "5"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
            .mount(&server),
    );

    let request = http_client()
        .get(format!("{}/items", server.uri()))
        .query(&[("page[size]", "5")])
        .header("Accept", "application/json");
    let payload: Payload = get_json(request).expect("success");
    assert_eq!(payload.count, 7);
}

#[test]
fn get_json_reports_status() {
    let rt = test_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such DOI"))
            .mount(&server),
    );

    let err = get_json::<Payload>(http_client().get(format!("{}/missing", server.uri())))
        .expect_err("404 must fail");
    assert_eq!(err.status(), Some(404));
    assert_eq!(format!("{err}"), "HTTP 404: no such DOI");
}

#[test]
fn get_json_reports_decode_error() {
    let rt = test_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server),
    );

    let err = get_json::<Payload>(http_client().get(server.uri())).expect_err("not JSON");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn get_json_reports_transport_error() {
    // Port 9 (discard) on localhost is closed in test environments
    let err = get_json::<Payload>(http_client().get("http://127.0.0.1:9/"))
        .expect_err("connection must fail");
    assert_eq!(err.status(), None);
    assert_eq!(err.status_label(), "transport");
}

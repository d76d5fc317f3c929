//! Integration tests for serving the OpenAPI document over HTTP

mod common;

use common::resources::{full_resource_root, resource_root, SPEC_31};
use common::test_server::TestServer;
use openapi_serve::config::ServeConfig;
use openapi_serve::middleware::SPEC_NOT_FOUND;
use std::fs;
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> ServeConfig {
    ServeConfig {
        resource_root: dir.path().to_string_lossy().to_string(),
        ..ServeConfig::default()
    }
}

#[test]
fn test_serves_exact_file_contents() {
    let dir = full_resource_root();
    let server = TestServer::from_config(&config_for(&dir));

    let reply = server.get("/openapi.yml");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "application/x-yaml");
    assert_eq!(reply.body, SPEC_31);
}

#[test]
fn test_missing_file_is_404() {
    let dir = resource_root();
    let server = TestServer::from_config(&ServeConfig {
        spec_path: "OpenAPI/missing.yml".to_string(),
        ..config_for(&dir)
    });

    let reply = server.get("/openapi.yml");
    assert_eq!(reply.status, 404);
    assert!(reply.body.contains(SPEC_NOT_FOUND));
}

#[test]
fn test_file_is_checked_per_request() {
    let dir = resource_root();
    let server = TestServer::from_config(&config_for(&dir));
    assert_eq!(server.get("/openapi.yml").status, 404);

    fs::write(dir.path().join("OpenAPI/openapi.yml"), SPEC_31).unwrap();
    assert_eq!(server.get("/openapi.yml").status, 200);

    fs::remove_file(dir.path().join("OpenAPI/openapi.yml")).unwrap();
    assert_eq!(server.get("/openapi.yml").status, 404);
}

#[test]
fn test_json_document_media_type() {
    let dir = resource_root();
    let json = r#"{"openapi":"3.1.0","info":{"title":"T","version":"1"},"paths":{}}"#;
    fs::write(dir.path().join("OpenAPI/openapi.json"), json).unwrap();
    let server = TestServer::from_config(&ServeConfig {
        spec_path: "OpenAPI/openapi.json".to_string(),
        ..config_for(&dir)
    });

    let reply = server.get("/openapi.yml");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "application/json");
    assert_eq!(reply.body, json);
}

#[test]
fn test_repeated_requests_are_byte_identical() {
    let dir = full_resource_root();
    let server = TestServer::from_config(&config_for(&dir));

    let first = server.get("/openapi.yml");
    for _ in 0..5 {
        assert_eq!(server.get("/openapi.yml"), first);
    }
}

#[test]
fn test_query_string_is_ignored() {
    let dir = full_resource_root();
    let server = TestServer::from_config(&config_for(&dir));

    let reply = server.get("/openapi.yml?download=1");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, SPEC_31);
}

#[test]
fn test_head_sends_headers_without_body() {
    let dir = full_resource_root();
    let server = TestServer::from_config(&config_for(&dir));

    assert_eq!(server.get("/openapi.yml").content_length, Some(SPEC_31.len()));

    let reply = server.send("HEAD /openapi.yml HTTP/1.1\r\nHost: localhost\r\n\r\n");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.content_type, "application/x-yaml");
    assert_eq!(reply.content_length, Some(0));
    assert!(reply.body.is_empty());
}

#[test]
fn test_request_headers_do_not_change_the_answer() {
    let dir = full_resource_root();
    let server = TestServer::from_config(&config_for(&dir));

    let plain = server.get("/openapi.yml");
    let decorated = server.send(
        "GET /openapi.yml HTTP/1.1\r\nHost: localhost\r\nAccept: application/json\r\n\
         User-Agent: curl/8.0\r\nX-Forwarded-For: 10.0.0.1\r\n\r\n",
    );
    assert_eq!(decorated.status, plain.status);
    assert_eq!(decorated.body, plain.body);
}

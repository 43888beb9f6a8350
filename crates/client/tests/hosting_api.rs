//! Wire-level tests for the four client operations against a local mock
//! server. Each test pins the exact method, path, headers, and body the
//! client is expected to send, and that response bodies pass through
//! unfiltered.

use mockito::{Matcher, Server};
use sitekit_client::HostingClient;
use sitekit_core::{ClientConfig, Error};

fn config_for(server: &Server) -> ClientConfig {
    let host = server.url().trim_start_matches("http://").to_string();
    ClientConfig {
        access_token: "test-token".to_string(),
        scheme: "http".to_string(),
        host,
        version_path: "/api/v1/".to_string(),
    }
}

#[test]
fn test_create_site_posts_name_and_returns_site() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v1/sites")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({ "name": "foo" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"abc","name":"foo","url":"https://foo.netlify.app"}"#)
        .expect(1)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let site = client.create_site("foo").unwrap();

    assert_eq!(site.id, "abc");
    assert_eq!(site.name, "foo");
    assert_eq!(site.url.as_deref(), Some("https://foo.netlify.app"));
    mock.assert();
}

#[test]
fn test_list_sites_returns_array_unfiltered_same_order() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/sites")
        .match_header("authorization", "Bearer test-token")
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"a"},{"id":"2","name":"b"}]"#)
        .expect(1)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let sites = client.list_sites().unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, "1");
    assert_eq!(sites[0].name, "a");
    assert_eq!(sites[1].id, "2");
    assert_eq!(sites[1].name, "b");
    mock.assert();
}

#[test]
fn test_resolve_site_id_first_exact_match_wins() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/sites")
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"a"},{"id":"2","name":"b"},{"id":"3","name":"b"}]"#)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.resolve_site_id("b").unwrap(), Some("2".to_string()));
}

#[test]
fn test_resolve_site_id_is_case_sensitive() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/sites")
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"Blog"}]"#)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.resolve_site_id("blog").unwrap(), None);
}

#[test]
fn test_resolve_site_id_refetches_every_call() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/sites")
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"a"}]"#)
        .expect(2)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.resolve_site_id("a").unwrap(), Some("1".to_string()));
    assert_eq!(client.resolve_site_id("a").unwrap(), Some("1".to_string()));
    mock.assert();
}

#[test]
fn test_resolve_site_id_empty_list_is_none() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/sites")
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.resolve_site_id("anything").unwrap(), None);
}

#[test]
fn test_deploy_site_uploads_bundle_bytes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("SITE123.zip"), b"fake zip bytes").unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v1/sites/SITE123/deploys")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/zip")
        .match_body("fake zip bytes")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"d1","state":"uploading","site_id":"SITE123"}"#)
        .expect(1)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let deploy = client.deploy_site("SITE123").unwrap();

    assert_eq!(deploy.id.as_deref(), Some("d1"));
    assert_eq!(deploy.state.as_deref(), Some("uploading"));
    assert_eq!(deploy.extra["site_id"].as_str(), Some("SITE123"));
    mock.assert();
}

#[test]
fn test_deploy_site_missing_bundle_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock(
            "POST",
            Matcher::Regex(r"^/api/v1/sites/.*/deploys$".to_string()),
        )
        .expect(0)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let err = client.deploy_site("definitely-missing").unwrap_err();

    match err {
        Error::Bundle(detail) => assert!(detail.contains("definitely-missing.zip")),
        other => panic!("expected bundle error, got {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_non_2xx_is_api_error_with_status_and_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/sites")
        .with_status(401)
        .with_body(r#"{"message":"Unauthorized"}"#)
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let err = client.list_sites().unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[test]
fn test_malformed_response_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/v1/sites")
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create();

    let client = HostingClient::new(&config_for(&server)).unwrap();
    let err = client.list_sites().unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

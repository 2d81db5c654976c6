//! End-to-end pipeline tests against a mock HTTP server.

use mockito::{Matcher, Server as MockServer};
use serde_json::json;
use taxii2_client::types::{Envelope, Status};
use taxii2_client::{ConnectParams, TaxiiConnection, TaxiiError, TaxiiFilters, TaxiiVersion};

const TAXII_21: &str = "application/taxii+json;version=2.1";
const STIX_21: &str = "application/stix+json;version=2.1";
const COLLECTION: &str = "91a7b528-80eb-42ed-a74d-c6fbd5a26116";

fn connect(server: &MockServer, version: TaxiiVersion) -> TaxiiConnection {
    let params = ConnectParams::from_url(&server.url(), "user", "pass")
        .unwrap()
        .with_version(version);
    TaxiiConnection::new(params).unwrap()
}

#[tokio::test]
async fn test_discovery_sends_taxii_21_headers() {
    let mut server = MockServer::new_async().await;
    let mock = server
        .mock("GET", "/taxii2/")
        .match_header("version", "2.1")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .match_header("accept", TAXII_21)
        .match_header("content-type", TAXII_21)
        .with_status(200)
        .with_header("content-type", TAXII_21)
        .with_body(
            json!({
                "title": "Some TAXII Server",
                "default": "/api1/",
                "api_roots": ["/api1/", "/api2/"]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let discovery = conn.server().discovery().await.unwrap().unwrap();

    mock.assert_async().await;
    assert_eq!(discovery.title, "Some TAXII Server");
    assert_eq!(discovery.default_api.as_deref(), Some("/api1/"));
    assert_eq!(discovery.api_roots().to_vec(), vec!["/api1/", "/api2/"]);
}

#[tokio::test]
async fn test_discovery_taxii_20_path_and_media() {
    let mut server = MockServer::new_async().await;
    let mock = server
        .mock("GET", "/taxii/")
        .match_header("version", "2.0")
        .match_header("accept", "application/vnd.oasis.taxii+json")
        .with_status(200)
        .with_body(r#"{"title":"Legacy"}"#)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V20);
    let discovery = conn.server().discovery().await.unwrap();

    mock.assert_async().await;
    assert_eq!(discovery.map(|d| d.title), Some("Legacy".to_string()));
}

#[tokio::test]
async fn test_error_statuses_map_to_reasons() {
    let cases = [
        (401, "Unauthorized"),
        (403, "Resource forbidden"),
        (404, "Resource not found"),
        (406, "client error"),
        (415, "client error"),
        (500, "server error"),
        (503, "server error"),
    ];

    for (status, reason) in cases {
        let mut server = MockServer::new_async().await;
        server
            .mock("GET", "/api1/")
            .with_status(status)
            .create_async()
            .await;

        let conn = connect(&server, TaxiiVersion::V21);
        let err = conn.api_root("/api1/").get().await.unwrap_err();
        assert_eq!(err.reason(), Some(reason), "status {}", status);
        assert_eq!(err.status(), Some(status as u16));
    }
}

#[tokio::test]
async fn test_error_body_is_attached() {
    let mut server = MockServer::new_async().await;
    server
        .mock("GET", "/api1/status/s1/")
        .with_status(404)
        .with_body(
            json!({
                "title": "Status not found",
                "http_status": "404",
                "details": {"status_id": "s1"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    match conn.api_root("/api1/").status("s1").await {
        Err(TaxiiError::Api { reason, message, .. }) => {
            assert_eq!(reason, "Resource not found");
            let message = message.expect("error message body");
            assert_eq!(message.title, "Status not found");
            assert_eq!(
                message.details.and_then(|d| d.get("status_id").cloned()),
                Some("s1".to_string())
            );
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_success_is_absent() {
    let mut server = MockServer::new_async().await;
    server
        .mock("GET", "/api1/collections/")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let collections = conn.api_root("/api1/").collections().await.unwrap();
    assert!(collections.is_none());
}

#[tokio::test]
async fn test_filtered_objects_query() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/objects/", COLLECTION);
    let mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("added_after".into(), "2020-01-01T00:00:00+00:00".into()),
            Matcher::UrlEncoded("match[type]".into(), "indicator,malware".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .match_header("accept", STIX_21)
        .match_header("content-type", STIX_21)
        .with_status(200)
        .with_body(
            json!({
                "more": true,
                "next": "page-2",
                "objects": [
                    {"type": "indicator", "id": "indicator--1", "spec_version": "2.1"},
                    {"type": "malware", "id": "malware--2", "spec_version": "2.1"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let filters = TaxiiFilters::new()
        .with_added_after("2020-01-01T00:00:00+00:00")
        .with_type(["indicator", "malware"])
        .with_limit(2);
    let envelope = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .get_objects(Some(&filters))
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(envelope.more, Some(true));
    assert_eq!(envelope.next.as_deref(), Some("page-2"));
    assert_eq!(envelope.objects().len(), 2);
}

#[tokio::test]
async fn test_plus_sent_escaped() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/manifest/", COLLECTION);
    let mock = server
        .mock("GET", path.as_str())
        .match_query(Matcher::Exact("added_after=2021-05-05T00:00:00%2B02:00".into()))
        .with_status(200)
        .with_body(r#"{"more":false,"objects":[]}"#)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let filters = TaxiiFilters::new().with_added_after("2021-05-05T00:00:00+02:00");
    let manifest = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .get_manifests(Some(&filters))
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(manifest.more, Some(false));
}

#[tokio::test]
async fn test_add_envelope_posts_stix() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/objects/", COLLECTION);
    let objects = vec![json!({"type": "indicator", "id": "indicator--1", "spec_version": "2.1"})];
    let mock = server
        .mock("POST", path.as_str())
        .match_header("accept", TAXII_21)
        .match_header("content-type", STIX_21)
        .match_body(Matcher::Json(json!({"objects": objects.clone()})))
        .with_status(202)
        .with_body(
            json!({
                "id": "2d086da7-4bdc-4f91-900e-d77486753710",
                "status": "pending",
                "total_count": 1,
                "success_count": 0,
                "failure_count": 0,
                "pending_count": "1"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let status: Status = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .add_envelope(&Envelope::new(objects))
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(status.pending_count.value(), 1);
    assert!(!status.is_complete());
}

#[tokio::test]
async fn test_delete_object_uses_delete_and_version_filters_only() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/objects/indicator--1/", COLLECTION);
    let mock = server
        .mock("DELETE", path.as_str())
        .match_query(Matcher::Exact("match%5Bversion%5D=all".into()))
        .with_status(200)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let filters = TaxiiFilters::new()
        .with_version(["all"])
        .with_type(["indicator"])
        .with_limit(3);
    let reply = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .delete_object("indicator--1", Some(&filters))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(reply.is_none());
}

#[tokio::test]
async fn test_raw_returns_body_bytes() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/objects/", COLLECTION);
    server
        .mock("GET", path.as_str())
        .match_header("accept", STIX_21)
        .with_status(200)
        .with_body(r#"{"objects":[]}"#)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let raw = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .get_raw()
        .await
        .unwrap();
    assert_eq!(&raw[..], br#"{"objects":[]}"#);
}

#[tokio::test]
async fn test_object_versions() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/objects/indicator--1/versions/", COLLECTION);
    server
        .mock("GET", path.as_str())
        .match_header("accept", TAXII_21)
        .with_status(200)
        .with_body(r#"{"more":false,"versions":["2016-01-01T01:01:01.000Z"]}"#)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V21);
    let versions = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .get_object_versions("indicator--1", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(versions.versions.map(|v| v.len()), Some(1));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let params = ConnectParams::new("127.0.0.1", "u", "p")
        .with_scheme("http")
        .with_port(1)
        .with_timeout(std::time::Duration::from_secs(2));
    let conn = TaxiiConnection::new(params).unwrap();
    let err = conn.server().discovery().await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn test_taxii_20_manifest_entries() {
    let mut server = MockServer::new_async().await;
    let path = format!("/api1/collections/{}/manifest/", COLLECTION);
    server
        .mock("GET", path.as_str())
        .match_header("accept", "application/vnd.oasis.taxii+json")
        .with_status(200)
        .with_body(r#"{"objects":[{"id":"indicator--1"},{"id":"malware--2","versions":["2017-01-27T13:49:53.935Z"]}]}"#)
        .create_async()
        .await;

    let conn = connect(&server, TaxiiVersion::V20);
    let manifest = taxii2_client::CollectionEndpoint::new(conn, "/api1/", COLLECTION)
        .get_manifest_entries(None)
        .await
        .unwrap()
        .unwrap();
    let entries = manifest.objects.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].versions.is_none());
}

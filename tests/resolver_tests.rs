//! Integration tests for server-probing version resolution.

use std::time::Duration;

use gocd::clients::{HttpClient, TransportError};
use gocd::resolver::{ServerVersionResolver, VersionResolver, VersionTable};
use gocd::resources::ResourcePath;
use gocd::{ApiVersion, ClientError, GocdConfig, RequestContext, ServerUrl, ServerVersion};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(url: &str) -> ServerVersionResolver<HttpClient> {
    let config = GocdConfig::builder()
        .server_url(ServerUrl::new(url).unwrap())
        .build()
        .unwrap();
    ServerVersionResolver::new(HttpClient::new(&config).unwrap())
}

async fn server_reporting(version: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": version,
            "build_number": "1234",
            "git_sha": "abcdef0"
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_resolves_pipeline_groups_to_v1() {
    let server = server_reporting("18.7.0").await;
    let resolver = resolver_for(&server.uri());

    let version = assert_ok!(
        resolver
            .resolve(
                &RequestContext::background(),
                &ResourcePath::from_static("admin/pipeline_groups"),
            )
            .await
    );
    assert_eq!(version, ApiVersion::Revision(1));
}

#[tokio::test]
async fn test_selects_version_by_server_release() {
    let pipelines = ResourcePath::from_static("admin/pipelines");

    let old = server_reporting("18.6.0").await;
    let version = assert_ok!(
        resolver_for(&old.uri())
            .resolve(&RequestContext::background(), &pipelines)
            .await
    );
    assert_eq!(version, ApiVersion::Revision(5));

    let new = server_reporting("18.7.0-7121").await;
    let version = assert_ok!(
        resolver_for(&new.uri())
            .resolve(&RequestContext::background(), &pipelines)
            .await
    );
    assert_eq!(version, ApiVersion::Revision(6));
}

#[tokio::test]
async fn test_unknown_path_fails_without_probing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "20.1.0"})))
        .expect(0)
        .mount(&server)
        .await;

    let error = assert_err!(
        resolver_for(&server.uri())
            .resolve(
                &RequestContext::background(),
                &ResourcePath::from_static("admin/unknown"),
            )
            .await
    );

    match error {
        ClientError::UnsupportedResource { path } => assert_eq!(path, "admin/unknown"),
        other => panic!("Expected UnsupportedResource, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rule_newer_than_server_is_unsupported() {
    let server = server_reporting("19.5.0").await;
    let secrets = ResourcePath::from_static("admin/secret_configs");
    let table = VersionTable::new().with_rule(
        secrets.clone(),
        ServerVersion::new(19, 6, 0),
        ApiVersion::Revision(1),
    );

    let config = GocdConfig::builder()
        .server_url(ServerUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let resolver = ServerVersionResolver::with_table(HttpClient::new(&config).unwrap(), table);

    let error = assert_err!(
        resolver
            .resolve(&RequestContext::background(), &secrets)
            .await
    );
    assert!(matches!(error, ClientError::UnsupportedResource { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let resolver = resolver_for("http://127.0.0.1:1");

    let error = assert_err!(
        resolver
            .resolve(
                &RequestContext::background().with_timeout(Duration::from_secs(10)),
                &ResourcePath::from_static("admin/pipeline_groups"),
            )
            .await
    );
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Network(_))
    ));
}

#[tokio::test]
async fn test_probe_failure_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/version"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let error = assert_err!(
        resolver_for(&server.uri())
            .resolve(
                &RequestContext::background(),
                &ResourcePath::from_static("admin/pipeline_groups"),
            )
            .await
    );
    assert_eq!(error.status(), Some(401));
}

#[tokio::test]
async fn test_unparseable_release_is_reported() {
    let server = server_reporting("nightly").await;

    let error = assert_err!(
        resolver_for(&server.uri())
            .resolve(
                &RequestContext::background(),
                &ResourcePath::from_static("agents"),
            )
            .await
    );
    assert!(matches!(
        error,
        ClientError::InvalidServerVersion { ref version } if version == "nightly"
    ));
}

#[tokio::test]
async fn test_probe_respects_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"version": "18.7.0"}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let ctx = RequestContext::background().with_timeout(Duration::from_millis(100));
    let started = std::time::Instant::now();

    let error = assert_err!(
        resolver_for(&server.uri())
            .resolve(&ctx, &ResourcePath::from_static("admin/pipeline_groups"))
            .await
    );

    assert!(matches!(
        error,
        ClientError::Transport(TransportError::DeadlineExceeded)
    ));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_server_version_reads_release() {
    let server = server_reporting("23.1.0").await;
    let version = assert_ok!(
        resolver_for(&server.uri())
            .server_version(&RequestContext::background())
            .await
    );
    assert_eq!(version, ServerVersion::new(23, 1, 0));
}

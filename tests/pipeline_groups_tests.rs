//! Integration tests for pipeline group listing.
//!
//! These tests run the full resolve-then-dispatch flow against a wiremock
//! server and check ordering, path construction, error mapping and
//! cancellation.

use std::time::Duration;

use gocd::clients::{ActionDispatcher, HttpClient, TransportError};
use gocd::resolver::StaticVersionResolver;
use gocd::resources::PIPELINE_GROUPS_PATH;
use gocd::{
    ApiVersion, ClientError, Credentials, GocdClient, GocdConfig, Password, RequestContext,
    ServerUrl, Username,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const V1_MEDIA_TYPE: &str = "application/vnd.go.cd.v1+json";

fn config_for(server: &MockServer) -> GocdConfig {
    GocdConfig::builder()
        .server_url(ServerUrl::new(server.uri()).unwrap())
        .credentials(Credentials::new(
            Username::new("user").unwrap(),
            Password::new("pass").unwrap(),
        ))
        .build()
        .unwrap()
}

/// Client that resolves `admin/pipeline_groups` to v1 without probing.
fn static_client(server: &MockServer) -> GocdClient<HttpClient, StaticVersionResolver> {
    let transport = HttpClient::new(&config_for(server)).unwrap();
    let resolver =
        StaticVersionResolver::new().with_version(PIPELINE_GROUPS_PATH, ApiVersion::Revision(1));
    GocdClient::with_parts(ActionDispatcher::new(transport), resolver)
}

fn two_groups() -> serde_json::Value {
    json!([
        {
            "name": "default",
            "pipelines": [
                {"name": "up42", "label": "${COUNT}"},
                {"name": "up43", "label": "${COUNT}"}
            ]
        },
        {
            "name": "build",
            "pipelines": [{"name": "compile"}]
        }
    ])
}

#[tokio::test]
async fn test_list_all_returns_groups_in_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .and(header("Accept", V1_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_groups()))
        .expect(1)
        .mount(&server)
        .await;

    let client = static_client(&server);
    let groups = assert_ok!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "")
            .await
    );

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "default");
    assert_eq!(groups[1].name, "build");
    assert_eq!(groups[0].pipelines.len(), 2);
    assert_eq!(groups[0].pipelines[1].name, "up43");
    assert_eq!(groups.response().status, 200);
    assert_eq!(groups.response().api_version, Some(ApiVersion::Revision(1)));
}

#[tokio::test]
async fn test_list_sends_basic_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = static_client(&server);
    let groups = assert_ok!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "")
            .await
    );
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_name_is_appended_without_separator() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groupsdefault"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "default", "pipelines": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = static_client(&server);
    let groups = assert_ok!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "default")
            .await
    );

    assert_eq!(groups.len(), 1);
    assert!(groups.response().url.ends_with("/api/admin/pipeline_groupsdefault"));
}

#[tokio::test]
async fn test_repeated_listing_is_stable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_groups()))
        .expect(2)
        .mount(&server)
        .await;

    let client = static_client(&server);
    let ctx = RequestContext::background();

    let first = assert_ok!(client.pipeline_groups().list(&ctx, "").await);
    let second = assert_ok!(client.pipeline_groups().list(&ctx, "").await);

    assert_eq!(first.into_inner(), second.into_inner());
}

#[tokio::test]
async fn test_not_found_is_http_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groupsmissing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Either the resource you requested was not found, \
                        or you are not authorized to perform this action."
        })))
        .mount(&server)
        .await;

    let client = static_client(&server);
    let error = assert_err!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "missing")
            .await
    );

    match &error {
        ClientError::HttpStatus { code, body, .. } => {
            assert_eq!(*code, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("Expected HttpStatus, got: {other:?}"),
    }
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error_with_real_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let client = static_client(&server);
    let error = assert_err!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "")
            .await
    );

    assert!(matches!(error, ClientError::Decode { .. }));
    assert_eq!(error.status(), Some(200));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"groups": []})))
        .mount(&server)
        .await;

    let client = static_client(&server);
    let error = assert_err!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "")
            .await
    );

    assert!(matches!(error, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_cancellation_interrupts_slow_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(two_groups())
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = static_client(&server);
    let (ctx, handle) = RequestContext::background().with_cancel();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    let started = std::time::Instant::now();
    let error = assert_err!(client.pipeline_groups().list(&ctx, "").await);

    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Cancelled)
    ));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_deadline_interrupts_slow_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(two_groups())
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = static_client(&server);
    let ctx = RequestContext::background().with_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let error = assert_err!(client.pipeline_groups().list(&ctx, "").await);

    assert!(matches!(
        error,
        ClientError::Transport(TransportError::DeadlineExceeded)
    ));
    assert!(error.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_already_cancelled_context_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = static_client(&server);
    let (ctx, handle) = RequestContext::background().with_cancel();
    handle.cancel();

    let error = assert_err!(client.pipeline_groups().list(&ctx, "").await);
    assert!(error.is_cancelled());
}

#[tokio::test]
async fn test_list_with_probing_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/version"))
        .and(header("Accept", V1_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "18.7.0",
            "build_number": "7121",
            "git_sha": "75a7f1e",
            "full_version": "18.7.0 (7121-75a7f1e)",
            "commit_url": "https://github.com/gocd/gocd/commits/75a7f1e"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/pipeline_groups"))
        .and(header("Accept", V1_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_groups()))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(GocdClient::new(&config_for(&server)));
    let groups = assert_ok!(
        client
            .pipeline_groups()
            .list(&RequestContext::background(), "")
            .await
    );

    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["default", "build"]);
}

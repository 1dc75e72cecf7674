//! Client management endpoint tests.

mod common;

use kc_admin_client::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn lists_clients_of_a_realm() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "abc", "clientId": "app1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let clients = client.get_clients(common::TOKEN, "demo", &[]).await?;

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id.as_deref(), Some("abc"));
    assert_eq!(clients[0].client_id.as_deref(), Some("app1"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None, "no filters, no query string");
    Ok(())
}

#[tokio::test]
async fn filters_clients_by_client_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients"))
        .and(query_param("clientId", "app1"))
        .and(query_param("viewableOnly", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "abc", "clientId": "app1", "enabled": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let clients = client
        .get_clients(common::TOKEN, "demo", &["clientId", "app1", "viewableOnly", "true"])
        .await?;

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].enabled, Some(true));
    Ok(())
}

#[tokio::test]
async fn odd_filter_list_fails_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .get_clients(common::TOKEN, "demo", &["viewableOnly"])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidParameterCount { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetches_a_client_by_internal_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "clientId": "app1",
            "publicClient": false,
            "redirectUris": ["https://app1.example.com/*"]
        })))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let c = client.get_client(common::TOKEN, "demo", "abc").await?;

    assert_eq!(c.client_id.as_deref(), Some("app1"));
    assert_eq!(c.public_client, Some(false));
    assert_eq!(c.redirect_uris.map(|u| u.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn fetches_the_client_secret() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients/abc/client-secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "secret", "value": "s3cr3t"})),
        )
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let secret = client.get_client_secret(common::TOKEN, "demo", "abc").await?;

    assert_eq!(secret.credential_type.as_deref(), Some("secret"));
    assert_eq!(secret.value.as_deref(), Some("s3cr3t"));
    Ok(())
}

#[tokio::test]
async fn missing_client_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Client not found"})),
        )
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .get_client(common::TOKEN, "demo", "nope")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"error":"Client not found"}"#);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_with_typed_holder_fails_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .get_clients(common::TOKEN, "demo", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

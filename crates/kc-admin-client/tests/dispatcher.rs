//! Dispatch-layer behavior shared by every wrapper.

mod common;

use std::time::Duration;

use kc_admin_client::{AdminClient, Config, Error};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port.
    let config = Config::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(500));
    let client = AdminClient::new(&config).unwrap();

    let err = client
        .get_authentication_flows(common::TOKEN, "demo")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn server_error_body_is_preserved_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/users/count"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client.count_users(common::TOKEN, "demo").await.unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_body_keeps_an_empty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/admin/realms/demo/users/u1"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .delete_user(common::TOKEN, "demo", "u1")
        .await
        .unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn truncated_error_body_is_a_transport_error() -> anyhow::Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Announces a 100-byte body but closes the connection after 5 bytes,
    // so reading the error payload fails after the status line arrived.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\nshort")
                .await;
        }
    });

    let client = AdminClient::new(&Config::new(base))?;
    let err = client.count_users(common::TOKEN, "demo").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    Ok(())
}

#[tokio::test]
async fn post_without_location_header_yields_none() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/realms/master/api/admin/realms/demo/users"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let location = client
        .create_user(
            common::TOKEN,
            "master",
            "demo",
            &kc_admin_client::dto::UserRepresentation::default(),
        )
        .await?;

    assert_eq!(location, None);
    Ok(())
}

#[tokio::test]
async fn every_verb_carries_the_bearer_token() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/users/u1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/auth/admin/realms/demo/users/u1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/auth/admin/realms/demo/users/u1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client.get_user(common::TOKEN, "demo", "u1").await?;
    client
        .update_user(
            common::TOKEN,
            "demo",
            "u1",
            &kc_admin_client::dto::UserRepresentation::default(),
        )
        .await?;
    client.delete_user(common::TOKEN, "demo", "u1").await?;
    Ok(())
}

#[tokio::test]
async fn clones_share_the_same_target() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/users/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(7)))
        .expect(2)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let clone = client.clone();

    let (a, b) = tokio::join!(
        client.count_users(common::TOKEN, "demo"),
        clone.count_users(common::TOKEN, "demo"),
    );
    assert_eq!(a?, 7);
    assert_eq!(b?, 7);
    Ok(())
}

//! Authentication management endpoint tests.

mod common;

use kc_admin_client::dto::{
    AuthenticatorConfigRepresentation, RequiredActionProviderRepresentation,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn lists_authentication_flows() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/authentication/flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "f-1", "alias": "browser", "builtIn": true, "topLevel": true},
            {"id": "f-2", "alias": "direct grant", "builtIn": true, "topLevel": true}
        ])))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let flows = client.get_authentication_flows(common::TOKEN, "demo").await?;

    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].alias.as_deref(), Some("browser"));
    assert_eq!(flows[1].built_in, Some(true));
    Ok(())
}

#[tokio::test]
async fn copies_a_flow_under_a_new_name() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/admin/realms/demo/authentication/flows/browser/copy"))
        .and(body_json(json!({"newName": "browser-with-otp"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client
        .copy_existing_authentication_flow(common::TOKEN, "demo", "browser", "browser-with-otp")
        .await?;
    Ok(())
}

#[tokio::test]
async fn raises_execution_priority_with_an_empty_post() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/auth/admin/realms/demo/authentication/executions/e1/raise-priority",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client
        .raise_execution_priority(common::TOKEN, "demo", "e1")
        .await?;

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty(), "priority moves carry no body");
    Ok(())
}

#[tokio::test]
async fn lowers_execution_priority() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/auth/admin/realms/demo/authentication/executions/e1/lower-priority",
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client
        .lower_execution_priority(common::TOKEN, "demo", "e1")
        .await?;
    Ok(())
}

#[tokio::test]
async fn lists_authenticator_providers_as_open_maps() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/auth/admin/realms/demo/authentication/authenticator-providers",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "auth-cookie", "displayName": "Cookie", "description": "SSO cookie"}
        ])))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let providers = client
        .get_authenticator_providers(common::TOKEN, "demo")
        .await?;

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].get("id"), Some(&json!("auth-cookie")));
    assert_eq!(providers[0].get("displayName"), Some(&json!("Cookie")));
    Ok(())
}

#[tokio::test]
async fn fetches_a_provider_config_description() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/auth/admin/realms/demo/authentication/config-description/auth-otp-form",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "OTP Form",
            "providerId": "auth-otp-form",
            "properties": [{"name": "otp.reuse", "type": "boolean", "defaultValue": false}]
        })))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let info = client
        .get_authenticator_provider_config(common::TOKEN, "demo", "auth-otp-form")
        .await?;

    assert_eq!(info.provider_id.as_deref(), Some("auth-otp-form"));
    let properties = info.properties.unwrap();
    assert_eq!(properties[0].property_type.as_deref(), Some("boolean"));
    Ok(())
}

#[tokio::test]
async fn updates_an_authenticator_config() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/admin/realms/demo/authentication/config/c1"))
        .and(body_json(json!({"alias": "otp-config", "config": {"digits": "6"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let mut values = kc_admin_client::dto::JsonObject::new();
    values.insert("digits".to_string(), json!("6"));
    let config = AuthenticatorConfigRepresentation {
        alias: Some("otp-config".to_string()),
        config: Some(values),
        ..AuthenticatorConfigRepresentation::default()
    };
    client
        .update_authenticator_config(common::TOKEN, "demo", "c1", &config)
        .await?;
    Ok(())
}

#[tokio::test]
async fn creates_an_execution_for_a_flow_and_returns_the_location() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/auth/admin/realms/demo/authentication/flows/browser/executions/execution",
        ))
        .and(body_json(json!({"provider": "auth-otp-form"})))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            "http://kc/auth/admin/realms/demo/authentication/executions/e-new",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let location = client
        .create_authentication_execution_for_flow(common::TOKEN, "demo", "browser", "auth-otp-form")
        .await?;

    assert!(location.unwrap().ends_with("/executions/e-new"));
    Ok(())
}

#[tokio::test]
async fn creates_a_flow_with_execution_for_an_existing_flow() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/auth/admin/realms/demo/authentication/flows/browser/executions/flow",
        ))
        .and(body_json(json!({
            "alias": "forms",
            "type": "basic-flow",
            "provider": "registration-page-form",
            "description": "Username and password forms"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let location = client
        .create_flow_with_execution_for_existing_flow(
            common::TOKEN,
            "demo",
            "browser",
            "forms",
            "basic-flow",
            "registration-page-form",
            "Username and password forms",
        )
        .await?;

    assert_eq!(location, None);
    Ok(())
}

#[tokio::test]
async fn registers_a_required_action() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/auth/admin/realms/demo/authentication/register-required-action",
        ))
        .and(body_json(json!({
            "providerId": "terms_and_conditions",
            "name": "Terms and Conditions"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client
        .register_required_action(
            common::TOKEN,
            "demo",
            "terms_and_conditions",
            "Terms and Conditions",
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn required_actions_decode_into_typed_representations() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/admin/realms/demo/authentication/required-actions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"alias": "VERIFY_EMAIL", "name": "Verify Email", "enabled": true, "defaultAction": false, "priority": 50}
        ])))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let actions = client.get_required_actions(common::TOKEN, "demo").await?;

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].alias.as_deref(), Some("VERIFY_EMAIL"));
    assert_eq!(actions[0].priority, Some(50));
    Ok(())
}

#[tokio::test]
async fn updates_a_required_action() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(
            "/auth/admin/realms/demo/authentication/required-actions/VERIFY_EMAIL",
        ))
        .and(body_json(json!({"alias": "VERIFY_EMAIL", "enabled": false})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let action = RequiredActionProviderRepresentation {
        alias: Some("VERIFY_EMAIL".to_string()),
        enabled: Some(false),
        ..RequiredActionProviderRepresentation::default()
    };
    client
        .update_required_action(common::TOKEN, "demo", "VERIFY_EMAIL", &action)
        .await?;
    Ok(())
}

#[tokio::test]
async fn deletes_an_authentication_flow() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/admin/realms/demo/authentication/flows/f-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client
        .delete_authentication_flow(common::TOKEN, "demo", "f-1")
        .await?;
    Ok(())
}

#[tokio::test]
async fn per_client_config_description_is_an_open_map() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/auth/admin/realms/demo/authentication/per-client-config-description",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client-jwt": [{"name": "Signature algorithm", "type": "List"}]
        })))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let description = client
        .get_config_description_for_clients(common::TOKEN, "demo")
        .await?;

    assert!(description.contains_key("client-jwt"));
    Ok(())
}

#[tokio::test]
async fn execution_listing_uses_the_flow_alias() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/auth/admin/realms/demo/authentication/flows/browser/executions",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "e-1",
                "displayName": "Cookie",
                "requirement": "ALTERNATIVE",
                "requirementChoices": ["REQUIRED", "ALTERNATIVE", "DISABLED"],
                "level": 0,
                "index": 0
            },
            {
                "id": "e-2",
                "displayName": "Username Password Form",
                "requirement": "REQUIRED",
                "level": 1,
                "index": 0
            }
        ])))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let executions = client
        .get_authentication_execution_for_flow(common::TOKEN, "demo", "browser")
        .await?;

    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].display_name.as_deref(), Some("Cookie"));
    assert_eq!(
        executions[0].requirement_choices.as_ref().map(Vec::len),
        Some(3)
    );
    assert_eq!(executions[1].level, Some(1));
    Ok(())
}

#[tokio::test]
async fn unregistered_required_actions_use_a_query_free_get() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/auth/admin/realms/demo/authentication/unregistered-required-actions",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"providerId": "webauthn-register", "name": "Webauthn Register"}
        ])))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let actions = client
        .get_unregistered_required_actions(common::TOKEN, "demo")
        .await?;

    assert_eq!(actions[0].get("providerId"), Some(&json!("webauthn-register")));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    Ok(())
}

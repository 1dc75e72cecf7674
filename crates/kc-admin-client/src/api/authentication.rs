//! Authentication management endpoints: flows, executions, authenticator
//! configuration and required actions.

use serde::Serialize;

use crate::client::AdminClient;
use crate::dto::{
    AuthenticationExecutionInfoRepresentation, AuthenticationExecutionRepresentation,
    AuthenticationFlowRepresentation, AuthenticatorConfigInfoRepresentation,
    AuthenticatorConfigRepresentation, JsonObject, RequiredActionProviderRepresentation,
};
use crate::error::Result;
use crate::request::RequestSpec;

const AUTHENTICATOR_PROVIDERS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/authenticator-providers";
const CLIENT_AUTHENTICATOR_PROVIDERS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/client-authenticator-providers";
const CONFIG_DESCRIPTION_PATH: &str =
    "/auth/admin/realms/:realm/authentication/config-description/:providerID";
const CONFIG_ID_PATH: &str = "/auth/admin/realms/:realm/authentication/config/:id";
const EXECUTIONS_PATH: &str = "/auth/admin/realms/:realm/authentication/executions";
const EXECUTION_ID_PATH: &str = "/auth/admin/realms/:realm/authentication/executions/:id";
const EXECUTION_CONFIG_PATH: &str =
    "/auth/admin/realms/:realm/authentication/executions/:id/config";
const EXECUTION_LOWER_PRIORITY_PATH: &str =
    "/auth/admin/realms/:realm/authentication/executions/:id/lower-priority";
const EXECUTION_RAISE_PRIORITY_PATH: &str =
    "/auth/admin/realms/:realm/authentication/executions/:id/raise-priority";
const FLOWS_PATH: &str = "/auth/admin/realms/:realm/authentication/flows";
const FLOW_COPY_PATH: &str = "/auth/admin/realms/:realm/authentication/flows/:flowAlias/copy";
const FLOW_EXECUTIONS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/flows/:flowAlias/executions";
const FLOW_EXECUTIONS_EXECUTION_PATH: &str =
    "/auth/admin/realms/:realm/authentication/flows/:flowAlias/executions/execution";
const FLOW_EXECUTIONS_FLOW_PATH: &str =
    "/auth/admin/realms/:realm/authentication/flows/:flowAlias/executions/flow";
const FLOW_ID_PATH: &str = "/auth/admin/realms/:realm/authentication/flows/:id";
const FORM_ACTION_PROVIDERS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/form-action-providers";
const FORM_PROVIDERS_PATH: &str = "/auth/admin/realms/:realm/authentication/form-providers";
const PER_CLIENT_CONFIG_DESCRIPTION_PATH: &str =
    "/auth/admin/realms/:realm/authentication/per-client-config-description";
const REGISTER_REQUIRED_ACTION_PATH: &str =
    "/auth/admin/realms/:realm/authentication/register-required-action";
const REQUIRED_ACTIONS_PATH: &str = "/auth/admin/realms/:realm/authentication/required-actions";
const REQUIRED_ACTION_ALIAS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/required-actions/:alias";
const UNREGISTERED_REQUIRED_ACTIONS_PATH: &str =
    "/auth/admin/realms/:realm/authentication/unregistered-required-actions";

#[derive(Serialize)]
struct FlowCopy<'a> {
    #[serde(rename = "newName")]
    new_name: &'a str,
}

#[derive(Serialize)]
struct ExecutionProvider<'a> {
    provider: &'a str,
}

#[derive(Serialize)]
struct NewFlowExecution<'a> {
    alias: &'a str,
    #[serde(rename = "type")]
    flow_type: &'a str,
    provider: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequiredActionRegistration<'a> {
    provider_id: &'a str,
    name: &'a str,
}

impl AdminClient {
    /// Returns the authenticator providers available on the server.
    pub async fn get_authenticator_providers(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<JsonObject>> {
        let spec = RequestSpec::new(AUTHENTICATOR_PROVIDERS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the client authenticator providers available on the server.
    pub async fn get_client_authenticator_providers(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<JsonObject>> {
        let spec = RequestSpec::new(CLIENT_AUTHENTICATOR_PROVIDERS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the configuration description of an authenticator provider.
    pub async fn get_authenticator_provider_config(
        &self,
        access_token: &str,
        realm: &str,
        provider_id: &str,
    ) -> Result<AuthenticatorConfigInfoRepresentation> {
        let spec = RequestSpec::new(CONFIG_DESCRIPTION_PATH)
            .param("realm", realm)
            .param("providerID", provider_id);
        self.get(access_token, spec).await
    }

    /// Returns the authenticator configuration with the given ID.
    pub async fn get_authenticator_config(
        &self,
        access_token: &str,
        realm: &str,
        config_id: &str,
    ) -> Result<AuthenticatorConfigRepresentation> {
        let spec = RequestSpec::new(CONFIG_ID_PATH)
            .param("realm", realm)
            .param("id", config_id);
        self.get(access_token, spec).await
    }

    /// Updates the authenticator configuration with the given ID.
    pub async fn update_authenticator_config(
        &self,
        access_token: &str,
        realm: &str,
        config_id: &str,
        config: &AuthenticatorConfigRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(CONFIG_ID_PATH)
            .param("realm", realm)
            .param("id", config_id);
        self.put(access_token, spec, config).await
    }

    /// Deletes the authenticator configuration with the given ID.
    pub async fn delete_authenticator_config(
        &self,
        access_token: &str,
        realm: &str,
        config_id: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(CONFIG_ID_PATH)
            .param("realm", realm)
            .param("id", config_id);
        self.delete(access_token, spec).await
    }

    /// Adds a new authentication execution. Returns the `Location` header
    /// pointing at the new resource, when the server set one.
    pub async fn create_authentication_execution(
        &self,
        access_token: &str,
        realm: &str,
        execution: &AuthenticationExecutionRepresentation,
    ) -> Result<Option<String>> {
        let spec = RequestSpec::new(EXECUTIONS_PATH).param("realm", realm);
        self.post(access_token, spec, execution).await
    }

    /// Deletes the execution with the given ID.
    pub async fn delete_authentication_execution(
        &self,
        access_token: &str,
        realm: &str,
        execution_id: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(EXECUTION_ID_PATH)
            .param("realm", realm)
            .param("id", execution_id);
        self.delete(access_token, spec).await
    }

    /// Attaches a new configuration to the execution.
    pub async fn update_authentication_execution(
        &self,
        access_token: &str,
        realm: &str,
        execution_id: &str,
        config: &AuthenticatorConfigRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(EXECUTION_CONFIG_PATH)
            .param("realm", realm)
            .param("id", execution_id);
        self.post(access_token, spec, config).await.map(|_| ())
    }

    /// Moves the execution one position down within its flow.
    pub async fn lower_execution_priority(
        &self,
        access_token: &str,
        realm: &str,
        execution_id: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(EXECUTION_LOWER_PRIORITY_PATH)
            .param("realm", realm)
            .param("id", execution_id);
        self.post_empty(access_token, spec).await.map(|_| ())
    }

    /// Moves the execution one position up within its flow.
    pub async fn raise_execution_priority(
        &self,
        access_token: &str,
        realm: &str,
        execution_id: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(EXECUTION_RAISE_PRIORITY_PATH)
            .param("realm", realm)
            .param("id", execution_id);
        self.post_empty(access_token, spec).await.map(|_| ())
    }

    /// Creates a new authentication flow.
    pub async fn create_authentication_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow: &AuthenticationFlowRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(FLOWS_PATH).param("realm", realm);
        self.post(access_token, spec, flow).await.map(|_| ())
    }

    /// Returns the authentication flows of the realm.
    pub async fn get_authentication_flows(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<AuthenticationFlowRepresentation>> {
        let spec = RequestSpec::new(FLOWS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Copies the flow with alias `flow_alias` under the name `new_name`.
    pub async fn copy_existing_authentication_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_alias: &str,
        new_name: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(FLOW_COPY_PATH)
            .param("realm", realm)
            .param("flowAlias", flow_alias);
        self.post(access_token, spec, &FlowCopy { new_name })
            .await
            .map(|_| ())
    }

    /// Returns the executions of the flow with the given alias, in
    /// evaluation order.
    pub async fn get_authentication_execution_for_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_alias: &str,
    ) -> Result<Vec<AuthenticationExecutionInfoRepresentation>> {
        let spec = RequestSpec::new(FLOW_EXECUTIONS_PATH)
            .param("realm", realm)
            .param("flowAlias", flow_alias);
        self.get(access_token, spec).await
    }

    /// Updates the execution of the flow with the given alias.
    pub async fn update_authentication_execution_for_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_alias: &str,
        execution: &AuthenticationExecutionInfoRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(FLOW_EXECUTIONS_PATH)
            .param("realm", realm)
            .param("flowAlias", flow_alias);
        self.put(access_token, spec, execution).await
    }

    /// Adds an execution for the given authenticator provider to the flow.
    /// Returns the `Location` header pointing at the new resource, when
    /// the server set one.
    pub async fn create_authentication_execution_for_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_alias: &str,
        provider: &str,
    ) -> Result<Option<String>> {
        let spec = RequestSpec::new(FLOW_EXECUTIONS_EXECUTION_PATH)
            .param("realm", realm)
            .param("flowAlias", flow_alias);
        self.post(access_token, spec, &ExecutionProvider { provider })
            .await
    }

    /// Adds a new flow with a new execution to the flow with alias
    /// `flow_alias`. Returns the `Location` header pointing at the new
    /// resource, when the server set one.
    pub async fn create_flow_with_execution_for_existing_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_alias: &str,
        alias: &str,
        flow_type: &str,
        provider: &str,
        description: &str,
    ) -> Result<Option<String>> {
        let spec = RequestSpec::new(FLOW_EXECUTIONS_FLOW_PATH)
            .param("realm", realm)
            .param("flowAlias", flow_alias);
        let body = NewFlowExecution {
            alias,
            flow_type,
            provider,
            description,
        };
        self.post(access_token, spec, &body).await
    }

    /// Returns the flow with the given ID.
    pub async fn get_authentication_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_id: &str,
    ) -> Result<AuthenticationFlowRepresentation> {
        let spec = RequestSpec::new(FLOW_ID_PATH)
            .param("realm", realm)
            .param("id", flow_id);
        self.get(access_token, spec).await
    }

    /// Deletes the flow with the given ID.
    pub async fn delete_authentication_flow(
        &self,
        access_token: &str,
        realm: &str,
        flow_id: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(FLOW_ID_PATH)
            .param("realm", realm)
            .param("id", flow_id);
        self.delete(access_token, spec).await
    }

    /// Returns the form action providers available on the server.
    pub async fn get_form_action_providers(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<JsonObject>> {
        let spec = RequestSpec::new(FORM_ACTION_PROVIDERS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the form providers available on the server.
    pub async fn get_form_providers(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<JsonObject>> {
        let spec = RequestSpec::new(FORM_PROVIDERS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the client authenticator configuration description for all
    /// clients of the realm.
    pub async fn get_config_description_for_clients(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<JsonObject> {
        let spec = RequestSpec::new(PER_CLIENT_CONFIG_DESCRIPTION_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Registers a new required action.
    pub async fn register_required_action(
        &self,
        access_token: &str,
        realm: &str,
        provider_id: &str,
        name: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(REGISTER_REQUIRED_ACTION_PATH).param("realm", realm);
        let body = RequiredActionRegistration { provider_id, name };
        self.post(access_token, spec, &body).await.map(|_| ())
    }

    /// Returns the required actions registered on the realm.
    pub async fn get_required_actions(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<RequiredActionProviderRepresentation>> {
        let spec = RequestSpec::new(REQUIRED_ACTIONS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the required action with the given alias.
    pub async fn get_required_action(
        &self,
        access_token: &str,
        realm: &str,
        action_alias: &str,
    ) -> Result<RequiredActionProviderRepresentation> {
        let spec = RequestSpec::new(REQUIRED_ACTION_ALIAS_PATH)
            .param("realm", realm)
            .param("alias", action_alias);
        self.get(access_token, spec).await
    }

    /// Updates the required action with the given alias.
    pub async fn update_required_action(
        &self,
        access_token: &str,
        realm: &str,
        action_alias: &str,
        action: &RequiredActionProviderRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(REQUIRED_ACTION_ALIAS_PATH)
            .param("realm", realm)
            .param("alias", action_alias);
        self.put(access_token, spec, action).await
    }

    /// Deletes the required action with the given alias.
    pub async fn delete_required_action(
        &self,
        access_token: &str,
        realm: &str,
        action_alias: &str,
    ) -> Result<()> {
        let spec = RequestSpec::new(REQUIRED_ACTION_ALIAS_PATH)
            .param("realm", realm)
            .param("alias", action_alias);
        self.delete(access_token, spec).await
    }

    /// Returns the required action providers not yet registered on the
    /// realm.
    pub async fn get_unregistered_required_actions(
        &self,
        access_token: &str,
        realm: &str,
    ) -> Result<Vec<JsonObject>> {
        let spec = RequestSpec::new(UNREGISTERED_REQUIRED_ACTIONS_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }
}

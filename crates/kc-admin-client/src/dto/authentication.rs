//! Authentication flow, execution and required action representations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// An authentication flow with its executions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationFlowRepresentation {
    /// Internal ID assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique alias the flow is referred to by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Flow provider, e.g. `basic-flow` or `client-flow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Whether this is a realm top-level flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level: Option<bool>,
    /// Whether the flow ships with the server and cannot be removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_in: Option<bool>,
    /// The executions making up the flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_executions: Option<Vec<AuthenticationExecutionExportRepresentation>>,
}

/// An execution as embedded in a flow representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecutionExportRepresentation {
    /// Authenticator provider ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator: Option<String>,
    /// Alias of the authenticator's configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_config: Option<String>,
    /// Whether this entry is a nested flow rather than an authenticator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_flow: Option<bool>,
    /// Alias of the nested flow, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_alias: Option<String>,
    /// Position within the parent flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Requirement level: `REQUIRED`, `ALTERNATIVE`, `CONDITIONAL` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    /// Whether the user may configure the authenticator during login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_setup_allowed: Option<bool>,
}

/// An execution as created or updated directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecutionRepresentation {
    /// Internal ID assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Authenticator provider ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator: Option<String>,
    /// ID of the authenticator's configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_config: Option<String>,
    /// Whether this entry is a nested flow rather than an authenticator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_flow: Option<bool>,
    /// ID of the nested flow, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
    /// ID of the flow the execution belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_flow: Option<String>,
    /// Position within the parent flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Requirement level: `REQUIRED`, `ALTERNATIVE`, `CONDITIONAL` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

/// An execution as listed for a flow, with display metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationExecutionInfoRepresentation {
    /// Internal ID assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alias of the execution's nested flow, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of the authenticator's configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_config: Option<String>,
    /// Whether this entry is a nested flow rather than an authenticator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_flow: Option<bool>,
    /// Whether the authenticator accepts configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
    /// Human-readable authenticator name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// ID of the nested flow, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
    /// Position among the siblings at the same level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    /// Nesting depth within the flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    /// Authenticator provider ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Requirement level currently set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    /// Requirement levels the execution supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_choices: Option<Vec<String>>,
}

/// Configuration values attached to an authenticator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorConfigRepresentation {
    /// Internal ID assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alias the configuration is referred to by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// The configuration values, keyed by property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<JsonObject>,
}

/// Description of an authenticator provider's configurable properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorConfigInfoRepresentation {
    /// Provider display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Help text shown in the admin console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// The configurable properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<ConfigPropertyRepresentation>>,
}

/// One configurable property of a provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPropertyRepresentation {
    /// Property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Label shown in the admin console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Help text shown in the admin console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Input kind, e.g. `String`, `boolean` or `List`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Default value; its JSON type depends on `type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Choices for `List` properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Whether the value is masked in the admin console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
}

/// A required action registered on the realm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredActionProviderRepresentation {
    /// Alias the action is referred to by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider ID backing the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Whether the action may be triggered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether the action is attached to newly created users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<bool>,
    /// Order relative to other required actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Provider-specific configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, String>>,
}

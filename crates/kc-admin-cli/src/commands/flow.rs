//! Authentication flow commands.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use kc_admin_client::dto::{
    AuthenticationExecutionInfoRepresentation, AuthenticationFlowRepresentation, JsonObject,
};
use kc_admin_client::AdminClient;

use crate::cli::{FlowCommand, ProviderKind};
use crate::config::OutputFormat;
use crate::output::{confirm, error, output, output_single, success};
use crate::CliConfig;

use super::{admin_client, get_realm, require_token, Globals};

/// Flow representation for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct FlowDisplay {
    /// Flow ID.
    pub id: String,
    /// Flow alias.
    pub alias: String,
    /// Flow provider.
    pub provider: String,
    /// Whether this is a top-level flow.
    #[tabled(rename = "Top Level")]
    pub top_level: bool,
    /// Whether the flow ships with the server.
    #[tabled(rename = "Built-in")]
    pub built_in: bool,
    /// Description.
    pub description: String,
}

impl From<AuthenticationFlowRepresentation> for FlowDisplay {
    fn from(flow: AuthenticationFlowRepresentation) -> Self {
        Self {
            id: flow.id.unwrap_or_default(),
            alias: flow.alias.unwrap_or_default(),
            provider: flow.provider_id.unwrap_or_default(),
            top_level: flow.top_level.unwrap_or_default(),
            built_in: flow.built_in.unwrap_or_default(),
            description: flow.description.unwrap_or_default(),
        }
    }
}

/// Execution representation for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct ExecutionDisplay {
    /// Execution ID.
    pub id: String,
    /// Human-readable name.
    #[tabled(rename = "Display Name")]
    pub display_name: String,
    /// Authenticator provider.
    pub provider: String,
    /// Requirement level.
    pub requirement: String,
    /// Nesting depth.
    pub level: i32,
    /// Position among siblings.
    pub index: i32,
}

impl From<AuthenticationExecutionInfoRepresentation> for ExecutionDisplay {
    fn from(execution: AuthenticationExecutionInfoRepresentation) -> Self {
        Self {
            id: execution.id.unwrap_or_default(),
            display_name: execution.display_name.unwrap_or_default(),
            provider: execution.provider_id.unwrap_or_default(),
            requirement: execution.requirement.unwrap_or_default(),
            level: execution.level.unwrap_or_default(),
            index: execution.index.unwrap_or_default(),
        }
    }
}

/// Provider factory for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct ProviderDisplay {
    /// Provider ID.
    pub id: String,
    /// Human-readable name.
    #[tabled(rename = "Display Name")]
    pub display_name: String,
    /// Description.
    pub description: String,
}

/// Runs a flow command.
pub async fn run_flow(
    cmd: FlowCommand,
    config: &CliConfig,
    globals: &Globals<'_>,
    output_format: OutputFormat,
) -> crate::CliResult<()> {
    let client = admin_client(config, globals.server)?;
    let token = require_token(config, globals.token)?;

    match cmd {
        FlowCommand::List { realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let flows = client.get_authentication_flows(&token, &realm).await?;
            let rows: Vec<FlowDisplay> = flows.into_iter().map(Into::into).collect();
            output(&rows, output_format)
        }
        FlowCommand::Get { id, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let flow = client.get_authentication_flow(&token, &realm, &id).await?;
            output_single(&flow, output_format)
        }
        FlowCommand::Create {
            alias,
            realm,
            description,
            provider,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            create_flow(&client, &token, &realm, alias, description, provider).await
        }
        FlowCommand::Copy {
            alias,
            new_name,
            realm,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            client
                .copy_existing_authentication_flow(&token, &realm, &alias, &new_name)
                .await?;
            success(&format!("Flow '{alias}' copied to '{new_name}'"));
            Ok(())
        }
        FlowCommand::Delete { id, realm, force } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            delete_flow(&client, &token, &realm, &id, force).await
        }
        FlowCommand::Executions { alias, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let executions = client
                .get_authentication_execution_for_flow(&token, &realm, &alias)
                .await?;
            let rows: Vec<ExecutionDisplay> = executions.into_iter().map(Into::into).collect();
            output(&rows, output_format)
        }
        FlowCommand::Providers { kind, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            list_providers(&client, &token, &realm, kind, output_format).await
        }
    }
}

/// Creates a new top-level flow.
async fn create_flow(
    client: &AdminClient,
    token: &str,
    realm: &str,
    alias: String,
    description: Option<String>,
    provider: String,
) -> crate::CliResult<()> {
    let flow = AuthenticationFlowRepresentation {
        alias: Some(alias.clone()),
        description,
        provider_id: Some(provider),
        top_level: Some(true),
        built_in: Some(false),
        ..AuthenticationFlowRepresentation::default()
    };

    client.create_authentication_flow(token, realm, &flow).await?;
    success(&format!("Flow '{alias}' created successfully"));
    Ok(())
}

/// Deletes a flow.
async fn delete_flow(
    client: &AdminClient,
    token: &str,
    realm: &str,
    id: &str,
    force: bool,
) -> crate::CliResult<()> {
    if !force && !confirm(&format!("Are you sure you want to delete flow '{id}'?"))? {
        error("Operation cancelled");
        return Ok(());
    }

    client.delete_authentication_flow(token, realm, id).await?;
    success(&format!("Flow '{id}' deleted successfully"));
    Ok(())
}

/// Lists provider factories of the chosen kind.
async fn list_providers(
    client: &AdminClient,
    token: &str,
    realm: &str,
    kind: ProviderKind,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let providers = match kind {
        ProviderKind::Authenticator => client.get_authenticator_providers(token, realm).await?,
        ProviderKind::ClientAuthenticator => {
            client.get_client_authenticator_providers(token, realm).await?
        }
        ProviderKind::FormAction => client.get_form_action_providers(token, realm).await?,
        ProviderKind::Form => client.get_form_providers(token, realm).await?,
    };

    let rows: Vec<ProviderDisplay> = providers.iter().map(provider_row).collect();
    output(&rows, format)
}

/// Builds a display row from the open provider map.
fn provider_row(provider: &JsonObject) -> ProviderDisplay {
    ProviderDisplay {
        id: string_field(provider, "id"),
        display_name: string_field(provider, "displayName"),
        description: string_field(provider, "description"),
    }
}

fn string_field(object: &JsonObject, key: &str) -> String {
    object
        .get(key)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_rows_tolerate_missing_keys() {
        let mut provider = JsonObject::new();
        provider.insert("id".to_string(), serde_json::json!("auth-cookie"));
        provider.insert("displayName".to_string(), serde_json::json!("Cookie"));

        let row = provider_row(&provider);
        assert_eq!(row.id, "auth-cookie");
        assert_eq!(row.display_name, "Cookie");
        assert_eq!(row.description, "");
    }

    #[test]
    fn flow_rows_surface_the_alias() {
        let flow = AuthenticationFlowRepresentation {
            id: Some("f-1".to_string()),
            alias: Some("browser".to_string()),
            provider_id: Some("basic-flow".to_string()),
            top_level: Some(true),
            built_in: Some(true),
            ..AuthenticationFlowRepresentation::default()
        };
        let row = FlowDisplay::from(flow);
        assert_eq!(row.alias, "browser");
        assert!(row.top_level);
        assert!(row.built_in);
    }
}

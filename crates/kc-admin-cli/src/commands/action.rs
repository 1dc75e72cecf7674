//! Required action commands.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use kc_admin_client::dto::{JsonObject, RequiredActionProviderRepresentation};
use kc_admin_client::AdminClient;

use crate::cli::ActionCommand;
use crate::config::OutputFormat;
use crate::output::{confirm, error, output, output_single, success};
use crate::CliConfig;

use super::{admin_client, get_realm, require_token, Globals};

/// Required action representation for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct ActionDisplay {
    /// Action alias.
    pub alias: String,
    /// Display name.
    pub name: String,
    /// Backing provider.
    pub provider: String,
    /// Whether the action may be triggered.
    pub enabled: bool,
    /// Whether the action applies to new users.
    #[tabled(rename = "Default")]
    pub default_action: bool,
    /// Order relative to other actions.
    pub priority: i32,
}

impl From<RequiredActionProviderRepresentation> for ActionDisplay {
    fn from(action: RequiredActionProviderRepresentation) -> Self {
        Self {
            alias: action.alias.unwrap_or_default(),
            name: action.name.unwrap_or_default(),
            provider: action.provider_id.unwrap_or_default(),
            enabled: action.enabled.unwrap_or_default(),
            default_action: action.default_action.unwrap_or_default(),
            priority: action.priority.unwrap_or_default(),
        }
    }
}

/// Unregistered provider for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct UnregisteredDisplay {
    /// Provider ID.
    pub provider: String,
    /// Display name.
    pub name: String,
}

/// Runs a required action command.
pub async fn run_action(
    cmd: ActionCommand,
    config: &CliConfig,
    globals: &Globals<'_>,
    output_format: OutputFormat,
) -> crate::CliResult<()> {
    let client = admin_client(config, globals.server)?;
    let token = require_token(config, globals.token)?;

    match cmd {
        ActionCommand::List { realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let actions = client.get_required_actions(&token, &realm).await?;
            let rows: Vec<ActionDisplay> = actions.into_iter().map(Into::into).collect();
            output(&rows, output_format)
        }
        ActionCommand::Unregistered { realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let providers = client.get_unregistered_required_actions(&token, &realm).await?;
            let rows: Vec<UnregisteredDisplay> = providers.iter().map(unregistered_row).collect();
            output(&rows, output_format)
        }
        ActionCommand::Get { alias, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let action = client.get_required_action(&token, &realm, &alias).await?;
            output_single(&action, output_format)
        }
        ActionCommand::Register {
            provider,
            name,
            realm,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            client
                .register_required_action(&token, &realm, &provider, &name)
                .await?;
            success(&format!("Required action '{provider}' registered successfully"));
            Ok(())
        }
        ActionCommand::Update {
            alias,
            realm,
            name,
            enabled,
            default_action,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            update_action(&client, &token, &realm, &alias, name, enabled, default_action).await
        }
        ActionCommand::Delete { alias, realm, force } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            delete_action(&client, &token, &realm, &alias, force).await
        }
    }
}

/// Updates a required action, carrying over unchanged fields.
async fn update_action(
    client: &AdminClient,
    token: &str,
    realm: &str,
    alias: &str,
    name: Option<String>,
    enabled: Option<bool>,
    default_action: Option<bool>,
) -> crate::CliResult<()> {
    let mut action = client.get_required_action(token, realm, alias).await?;

    if name.is_some() {
        action.name = name;
    }
    if enabled.is_some() {
        action.enabled = enabled;
    }
    if default_action.is_some() {
        action.default_action = default_action;
    }

    client.update_required_action(token, realm, alias, &action).await?;
    success(&format!("Required action '{alias}' updated successfully"));
    Ok(())
}

/// Deletes a required action.
async fn delete_action(
    client: &AdminClient,
    token: &str,
    realm: &str,
    alias: &str,
    force: bool,
) -> crate::CliResult<()> {
    if !force && !confirm(&format!("Are you sure you want to delete required action '{alias}'?"))? {
        error("Operation cancelled");
        return Ok(());
    }

    client.delete_required_action(token, realm, alias).await?;
    success(&format!("Required action '{alias}' deleted successfully"));
    Ok(())
}

/// Builds a display row from the open provider map.
fn unregistered_row(provider: &JsonObject) -> UnregisteredDisplay {
    let text = |key: &str| {
        provider
            .get(key)
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string()
    };
    UnregisteredDisplay {
        provider: text("providerId"),
        name: text("name"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_rows_read_the_provider_id_key() {
        let mut provider = JsonObject::new();
        provider.insert("providerId".to_string(), serde_json::json!("webauthn-register"));
        provider.insert("name".to_string(), serde_json::json!("Webauthn Register"));

        let row = unregistered_row(&provider);
        assert_eq!(row.provider, "webauthn-register");
        assert_eq!(row.name, "Webauthn Register");
    }

    #[test]
    fn action_rows_default_the_flags_to_false() {
        let action = RequiredActionProviderRepresentation {
            alias: Some("CONFIGURE_TOTP".to_string()),
            name: Some("Configure OTP".to_string()),
            ..RequiredActionProviderRepresentation::default()
        };
        let row = ActionDisplay::from(action);
        assert_eq!(row.alias, "CONFIGURE_TOTP");
        assert!(!row.enabled);
        assert!(!row.default_action);
        assert_eq!(row.priority, 0);
    }
}

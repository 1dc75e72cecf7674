//! Client management commands.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use kc_admin_client::dto::ClientRepresentation;
use kc_admin_client::AdminClient;

use crate::cli::ClientCommand;
use crate::config::OutputFormat;
use crate::output::{output, output_single, success};
use crate::CliConfig;

use super::{admin_client, get_realm, require_token, Globals};

/// Client representation for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct ClientDisplay {
    /// Internal ID.
    pub id: String,
    /// Client ID.
    #[tabled(rename = "Client ID")]
    pub client_id: String,
    /// Protocol.
    pub protocol: String,
    /// Whether the client is enabled.
    pub enabled: bool,
    /// Whether the client is public.
    #[tabled(rename = "Public")]
    pub public_client: bool,
}

impl From<ClientRepresentation> for ClientDisplay {
    fn from(client: ClientRepresentation) -> Self {
        Self {
            id: client.id.unwrap_or_default(),
            client_id: client.client_id.unwrap_or_default(),
            protocol: client.protocol.unwrap_or_default(),
            enabled: client.enabled.unwrap_or_default(),
            public_client: client.public_client.unwrap_or_default(),
        }
    }
}

/// Runs a client command.
pub async fn run_client(
    cmd: ClientCommand,
    config: &CliConfig,
    globals: &Globals<'_>,
    output_format: OutputFormat,
) -> crate::CliResult<()> {
    let client = admin_client(config, globals.server)?;
    let token = require_token(config, globals.token)?;

    match cmd {
        ClientCommand::List { realm, client_id } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            list_clients(&client, &token, &realm, client_id, output_format).await
        }
        ClientCommand::Get { id, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let found = client.get_client(&token, &realm, &id).await?;
            output_single(&found, output_format)
        }
        ClientCommand::Secret { id, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            get_secret(&client, &token, &realm, &id, output_format).await
        }
    }
}

/// Lists clients in a realm.
async fn list_clients(
    client: &AdminClient,
    token: &str,
    realm: &str,
    client_id: Option<String>,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let mut params: Vec<&str> = Vec::new();
    if let Some(id) = client_id.as_deref() {
        params.extend(["clientId", id]);
    }

    let clients = client.get_clients(token, realm, &params).await?;
    let rows: Vec<ClientDisplay> = clients.into_iter().map(Into::into).collect();
    output(&rows, format)
}

/// Prints the secret of a confidential client.
async fn get_secret(
    client: &AdminClient,
    token: &str,
    realm: &str,
    id: &str,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let credential = client.get_client_secret(token, realm, id).await?;

    match format {
        OutputFormat::Table => {
            let value = credential.value.unwrap_or_default();
            success(&format!("Secret: {value}"));
            Ok(())
        }
        _ => output_single(&credential, format),
    }
}

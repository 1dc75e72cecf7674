//! User management commands.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use kc_admin_client::dto::UserRepresentation;
use kc_admin_client::AdminClient;

use crate::cli::UserCommand;
use crate::config::OutputFormat;
use crate::output::{confirm, error, info, output, output_single, success};
use crate::CliConfig;

use super::{admin_client, get_realm, require_token, token_realm, Globals};

/// User representation for display.
#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct UserDisplay {
    /// User ID.
    pub id: String,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// First name.
    #[tabled(rename = "First Name")]
    pub first_name: String,
    /// Last name.
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    /// Whether the user is enabled.
    pub enabled: bool,
}

impl From<UserRepresentation> for UserDisplay {
    fn from(user: UserRepresentation) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            username: user.username.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            enabled: user.enabled.unwrap_or_default(),
        }
    }
}

/// Runs a user command.
pub async fn run_user(
    cmd: UserCommand,
    config: &CliConfig,
    globals: &Globals<'_>,
    output_format: OutputFormat,
) -> crate::CliResult<()> {
    let client = admin_client(config, globals.server)?;
    let token = require_token(config, globals.token)?;

    match cmd {
        UserCommand::List {
            realm,
            search,
            username,
            email,
            first_name,
            last_name,
            max,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let req_realm = token_realm(config, globals.auth_realm, &realm);
            list_users(
                &client,
                &token,
                &req_realm,
                &realm,
                search,
                username,
                email,
                first_name,
                last_name,
                max,
                output_format,
            )
            .await
        }
        UserCommand::Get { id, realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let user = client.get_user(&token, &realm, &id).await?;
            output_single(&user, output_format)
        }
        UserCommand::Create {
            username,
            realm,
            email,
            first_name,
            last_name,
            enabled,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let req_realm = token_realm(config, globals.auth_realm, &realm);
            create_user(
                &client,
                &token,
                &req_realm,
                &realm,
                username,
                email,
                first_name,
                last_name,
                enabled,
            )
            .await
        }
        UserCommand::Update {
            id,
            realm,
            email,
            first_name,
            last_name,
            enabled,
        } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            update_user(&client, &token, &realm, &id, email, first_name, last_name, enabled).await
        }
        UserCommand::Delete { id, realm, force } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            delete_user(&client, &token, &realm, &id, force).await
        }
        UserCommand::Count { realm } => {
            let realm = get_realm(config, realm.as_deref().or(globals.realm))?;
            let count = client.count_users(&token, &realm).await?;
            match output_format {
                OutputFormat::Table => {
                    info(&format!("Realm '{realm}' has {count} users"));
                    Ok(())
                }
                _ => output_single(&count, output_format),
            }
        }
    }
}

/// Lists users in a realm.
#[allow(clippy::too_many_arguments)]
async fn list_users(
    client: &AdminClient,
    token: &str,
    req_realm: &str,
    realm: &str,
    search: Option<String>,
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    max: u32,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let max = max.to_string();
    let mut params: Vec<&str> = vec!["max", &max];

    if let Some(s) = search.as_deref() {
        params.extend(["search", s]);
    }
    if let Some(u) = username.as_deref() {
        params.extend(["username", u]);
    }
    if let Some(e) = email.as_deref() {
        params.extend(["email", e]);
    }
    if let Some(f) = first_name.as_deref() {
        params.extend(["firstName", f]);
    }
    if let Some(l) = last_name.as_deref() {
        params.extend(["lastName", l]);
    }

    let page = client.get_users(token, req_realm, realm, &params).await?;
    let users: Vec<UserDisplay> = page.users.into_iter().map(Into::into).collect();
    output(&users, format)
}

/// Creates a new user.
#[allow(clippy::too_many_arguments)]
async fn create_user(
    client: &AdminClient,
    token: &str,
    req_realm: &str,
    realm: &str,
    username: String,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    enabled: bool,
) -> crate::CliResult<()> {
    let user = UserRepresentation {
        username: Some(username.clone()),
        email,
        first_name,
        last_name,
        enabled: Some(enabled),
        ..UserRepresentation::default()
    };

    let location = client.create_user(token, req_realm, realm, &user).await?;

    success(&format!("User '{username}' created successfully"));
    if let Some(location) = location {
        info(&format!("Location: {location}"));
    }
    Ok(())
}

/// Updates a user, carrying over the fields that were not changed.
#[allow(clippy::too_many_arguments)]
async fn update_user(
    client: &AdminClient,
    token: &str,
    realm: &str,
    id: &str,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    enabled: Option<bool>,
) -> crate::CliResult<()> {
    let mut user = client.get_user(token, realm, id).await?;

    if email.is_some() {
        user.email = email;
    }
    if first_name.is_some() {
        user.first_name = first_name;
    }
    if last_name.is_some() {
        user.last_name = last_name;
    }
    if enabled.is_some() {
        user.enabled = enabled;
    }

    client.update_user(token, realm, id, &user).await?;
    success(&format!("User '{id}' updated successfully"));
    Ok(())
}

/// Deletes a user.
async fn delete_user(
    client: &AdminClient,
    token: &str,
    realm: &str,
    id: &str,
    force: bool,
) -> crate::CliResult<()> {
    if !force && !confirm(&format!("Are you sure you want to delete user '{id}'?"))? {
        error("Operation cancelled");
        return Ok(());
    }

    client.delete_user(token, realm, id).await?;
    success(&format!("User '{id}' deleted successfully"));
    Ok(())
}

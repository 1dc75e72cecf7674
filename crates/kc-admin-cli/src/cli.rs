//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// kc-admin - command-line harness for the Keycloak admin REST API.
#[derive(Debug, Parser)]
#[command(name = "kc-admin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Server URL (overrides config).
    #[arg(short, long, env = "KC_ADMIN_SERVER")]
    pub server: Option<String>,

    /// Default realm (overrides config).
    #[arg(short, long, env = "KC_ADMIN_REALM")]
    pub realm: Option<String>,

    /// Realm the access token was issued for (overrides config).
    #[arg(long, env = "KC_ADMIN_AUTH_REALM")]
    pub auth_realm: Option<String>,

    /// Bearer token for the admin API (overrides config).
    #[arg(short, long, env = "KC_ADMIN_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// User management commands.
    #[command(subcommand)]
    User(UserCommand),

    /// Client management commands.
    #[command(subcommand)]
    Client(ClientCommand),

    /// Authentication flow commands.
    #[command(subcommand)]
    Flow(FlowCommand),

    /// Required action commands.
    #[command(subcommand)]
    Action(ActionCommand),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// User commands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users in a realm.
    List {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Search query (matches username, name and email).
        #[arg(long)]
        search: Option<String>,

        /// Filter by username.
        #[arg(long)]
        username: Option<String>,

        /// Filter by email.
        #[arg(long)]
        email: Option<String>,

        /// Filter by first name.
        #[arg(long)]
        first_name: Option<String>,

        /// Filter by last name.
        #[arg(long)]
        last_name: Option<String>,

        /// Maximum number of results.
        #[arg(long, default_value = "100")]
        max: u32,
    },

    /// Get user details.
    Get {
        /// User ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Create a new user.
    Create {
        /// Username.
        username: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Email address.
        #[arg(long)]
        email: Option<String>,

        /// First name.
        #[arg(long)]
        first_name: Option<String>,

        /// Last name.
        #[arg(long)]
        last_name: Option<String>,

        /// Enable the user.
        #[arg(long, default_value = "true")]
        enabled: bool,
    },

    /// Update a user.
    Update {
        /// User ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// New email address.
        #[arg(long)]
        email: Option<String>,

        /// New first name.
        #[arg(long)]
        first_name: Option<String>,

        /// New last name.
        #[arg(long)]
        last_name: Option<String>,

        /// Enable/disable the user.
        #[arg(long)]
        enabled: Option<bool>,
    },

    /// Delete a user.
    Delete {
        /// User ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// Count users in a realm.
    Count {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },
}

/// Client commands.
#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// List clients in a realm.
    List {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Filter by client ID.
        #[arg(long)]
        client_id: Option<String>,
    },

    /// Get client details.
    Get {
        /// Internal client ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Get the client secret.
    Secret {
        /// Internal client ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },
}

/// Authentication flow commands.
#[derive(Debug, Subcommand)]
pub enum FlowCommand {
    /// List authentication flows in a realm.
    List {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Get flow details.
    Get {
        /// Flow ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Create a new top-level flow.
    Create {
        /// Flow alias.
        alias: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Flow description.
        #[arg(long)]
        description: Option<String>,

        /// Flow provider.
        #[arg(long, default_value = "basic-flow")]
        provider: String,
    },

    /// Copy an existing flow under a new name.
    Copy {
        /// Alias of the flow to copy.
        alias: String,

        /// Name of the copy.
        new_name: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Delete a flow.
    Delete {
        /// Flow ID.
        id: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// List the executions of a flow.
    Executions {
        /// Flow alias.
        alias: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// List provider factories available on the server.
    Providers {
        /// Provider kind to list.
        #[arg(long, value_enum, default_value = "authenticator")]
        kind: ProviderKind,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },
}

/// Provider factory kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProviderKind {
    /// Authenticator providers.
    Authenticator,
    /// Client authenticator providers.
    ClientAuthenticator,
    /// Form action providers.
    FormAction,
    /// Form providers.
    Form,
}

/// Required action commands.
#[derive(Debug, Subcommand)]
pub enum ActionCommand {
    /// List required actions registered on a realm.
    List {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// List required action providers not yet registered.
    Unregistered {
        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Get required action details.
    Get {
        /// Action alias.
        alias: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Register a required action provider.
    Register {
        /// Provider ID to register.
        provider: String,

        /// Display name.
        #[arg(long)]
        name: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,
    },

    /// Update a required action.
    Update {
        /// Action alias.
        alias: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// New display name.
        #[arg(long)]
        name: Option<String>,

        /// Enable/disable the action.
        #[arg(long)]
        enabled: Option<bool>,

        /// Set the action as default for new users.
        #[arg(long)]
        default_action: Option<bool>,
    },

    /// Delete a required action.
    Delete {
        /// Action alias.
        alias: String,

        /// Realm name.
        #[arg(long)]
        realm: Option<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key (server_url, default_realm, auth_realm, token,
        /// output_format).
        key: String,

        /// New value.
        value: String,
    },

    /// Write a default configuration file.
    Init,
}

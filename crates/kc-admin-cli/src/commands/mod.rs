//! Command implementations.

pub mod action;
pub mod client;
pub mod config;
pub mod flow;
pub mod user;

pub use config::run_config;
pub use user::run_user;
pub use client::run_client;
pub use flow::run_flow;
pub use action::run_action;

use kc_admin_client::{AdminClient, Config};

use crate::CliConfig;

/// Global connection overrides taken from flags and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Globals<'a> {
    /// Server URL override.
    pub server: Option<&'a str>,
    /// Realm override.
    pub realm: Option<&'a str>,
    /// Token realm override.
    pub auth_realm: Option<&'a str>,
    /// Bearer token override.
    pub token: Option<&'a str>,
}

/// Builds the admin client for the effective server URL.
pub fn admin_client(config: &CliConfig, server: Option<&str>) -> crate::CliResult<AdminClient> {
    let server_url = server
        .map(|s| s.to_string())
        .unwrap_or_else(|| config.server_url.clone());
    tracing::debug!(server = %server_url, "using admin endpoint");
    let client = AdminClient::new(&Config::new(server_url))?;
    Ok(client)
}

/// Resolves the bearer token from the flag, environment or config file.
pub fn require_token(config: &CliConfig, token_arg: Option<&str>) -> crate::CliResult<String> {
    token_arg
        .map(|s| s.to_string())
        .or_else(|| config.token.clone())
        .ok_or_else(|| {
            crate::CliError::Config(
                "no access token; pass --token, set KC_ADMIN_TOKEN or run \
                 'kc-admin config set token <value>'"
                    .to_string(),
            )
        })
}

/// Gets the effective realm.
pub fn get_realm(config: &CliConfig, realm_arg: Option<&str>) -> crate::CliResult<String> {
    config
        .effective_realm(realm_arg)
        .ok_or_else(|| crate::CliError::InvalidArgument("realm is required".to_string()))
}

/// Resolves the realm the token was issued for, falling back to the
/// operated-on realm.
pub fn token_realm(config: &CliConfig, arg: Option<&str>, target: &str) -> String {
    arg.map(|s| s.to_string())
        .or_else(|| config.auth_realm.clone())
        .unwrap_or_else(|| target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_flag_wins_over_config() {
        let config = CliConfig {
            token: Some("from-config".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(require_token(&config, Some("from-flag")).unwrap(), "from-flag");
        assert_eq!(require_token(&config, None).unwrap(), "from-config");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let config = CliConfig::default();
        let err = require_token(&config, None).unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn token_realm_falls_back_to_the_target() {
        let config = CliConfig::default();
        assert_eq!(token_realm(&config, Some("master"), "demo"), "master");
        assert_eq!(token_realm(&config, None, "demo"), "demo");

        let config = CliConfig {
            auth_realm: Some("master".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(token_realm(&config, None, "demo"), "master");
    }
}

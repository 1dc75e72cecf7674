//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server URL (e.g., http://localhost:8080).
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Default realm to operate on.
    pub default_realm: Option<String>,

    /// Realm the access token was issued for. Falls back to the
    /// operated-on realm when unset.
    pub auth_realm: Option<String>,

    /// Static bearer token obtained out of band.
    pub token: Option<String>,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default server URL.
fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_realm: None,
            auth_realm: None,
            token: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".kc-admin").join("config.toml"))
    }

    /// Gets the effective realm (from args or config).
    pub fn effective_realm(&self, arg_realm: Option<&str>) -> Option<String> {
        arg_realm
            .map(|s| s.to_string())
            .or_else(|| self.default_realm.clone())
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// Quiet (minimal output).
    Quiet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config_file() {
        let content = r#"
            server_url = "https://kc.example.com"
            default_realm = "demo"
            auth_realm = "master"
            token = "abc"
            output_format = "json"
        "#;
        let config: CliConfig = toml::from_str(content).unwrap();
        assert_eq!(config.server_url, "https://kc.example.com");
        assert_eq!(config.default_realm.as_deref(), Some("demo"));
        assert_eq!(config.auth_realm.as_deref(), Some("master"));
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert!(matches!(config.output_format, OutputFormat::Json));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.server_url, "http://localhost:8080");
        assert!(config.default_realm.is_none());
        assert!(config.token.is_none());
        assert!(matches!(config.output_format, OutputFormat::Table));
    }

    #[test]
    fn arg_realm_wins_over_configured_default() {
        let config = CliConfig {
            default_realm: Some("demo".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(config.effective_realm(Some("other")).as_deref(), Some("other"));
        assert_eq!(config.effective_realm(None).as_deref(), Some("demo"));
    }
}

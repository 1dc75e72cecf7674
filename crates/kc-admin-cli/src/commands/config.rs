//! Configuration management commands.

use crate::cli::ConfigCommand;
use crate::config::OutputFormat;
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => set_config(config, &key, &value),
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    println!("server_url: {}", config.server_url);

    if let Some(realm) = &config.default_realm {
        println!("default_realm: {realm}");
    }

    if let Some(realm) = &config.auth_realm {
        println!("auth_realm: {realm}");
    }

    if config.token.is_some() {
        println!("token: ********");
    }

    println!("output_format: {:?}", config.output_format);

    Ok(())
}

/// Sets a configuration value.
fn set_config(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    match key {
        "server_url" | "server" => {
            config.server_url = value.to_string();
        }
        "default_realm" | "realm" => {
            if value.is_empty() || value == "none" {
                config.default_realm = None;
            } else {
                config.default_realm = Some(value.to_string());
            }
        }
        "auth_realm" => {
            if value.is_empty() || value == "none" {
                config.auth_realm = None;
            } else {
                config.auth_realm = Some(value.to_string());
            }
        }
        "token" => {
            if value.is_empty() || value == "none" {
                config.token = None;
            } else {
                config.token = Some(value.to_string());
            }
        }
        "output_format" | "output" => {
            config.output_format = parse_output_format(value).ok_or_else(|| {
                crate::CliError::InvalidArgument(format!(
                    "Unknown output format: {value}. Supported: table, json, quiet"
                ))
            })?;
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {key}. Known keys: server_url, default_realm, \
                 auth_realm, token, output_format"
            )));
        }
    }

    config.save()?;
    if key == "token" {
        success(&format!("Set {key}"));
    } else {
        success(&format!("Set {key} = {value}"));
    }
    Ok(())
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info("Initializing kc-admin configuration...");
    println!();

    // Server URL
    print!("Server URL [{}]: ", config.server_url);
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            config.server_url = trimmed.to_string();
        }
    }

    // Default realm
    let current_realm = config.default_realm.as_deref().unwrap_or("(none)");
    print!("Default realm [{current_realm}]: ");
    std::io::Write::flush(&mut std::io::stdout())?;
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed != "(none)" {
            config.default_realm = Some(trimmed.to_string());
        }
    }

    // Token realm
    let current_auth = config.auth_realm.as_deref().unwrap_or("(same as realm)");
    print!("Token realm [{current_auth}]: ");
    std::io::Write::flush(&mut std::io::stdout())?;
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed != "(same as realm)" {
            config.auth_realm = Some(trimmed.to_string());
        }
    }

    // Output format
    print!("Output format (table/json/quiet) [{:?}]: ", config.output_format);
    std::io::Write::flush(&mut std::io::stdout())?;
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    if let Some(format) = parse_output_format(input.trim()) {
        config.output_format = format;
    }

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    info("Set the bearer token with 'kc-admin config set token <value>'");
    Ok(())
}

/// Parses an output format name.
fn parse_output_format(value: &str) -> Option<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Some(OutputFormat::Table),
        "json" => Some(OutputFormat::Json),
        "quiet" => Some(OutputFormat::Quiet),
        _ => None,
    }
}

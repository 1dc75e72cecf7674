//! # kc-admin
//!
//! Command-line harness for the Keycloak admin REST API.

#![forbid(unsafe_code)]
#![deny(warnings)]

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kc_admin_cli::{
    cli::{Cli, Command},
    commands::{run_action, run_client, run_config, run_flow, run_user, Globals},
    config::CliConfig,
    output::error,
};

#[tokio::main]
async fn main() {
    let Cli {
        server,
        realm,
        auth_realm,
        token,
        output,
        verbose,
        command,
    } = Cli::parse();

    // Initialize tracing
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    let globals = Globals {
        server: server.as_deref(),
        realm: realm.as_deref(),
        auth_realm: auth_realm.as_deref(),
        token: token.as_deref(),
    };

    // Execute command
    let result = match command {
        Command::User(cmd) => run_user(cmd, &config, &globals, output).await,
        Command::Client(cmd) => run_client(cmd, &config, &globals, output).await,
        Command::Flow(cmd) => run_flow(cmd, &config, &globals, output).await,
        Command::Action(cmd) => run_action(cmd, &config, &globals, output).await,
        Command::Config(cmd) => run_config(cmd, &mut config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}

//! # kc-admin-cli
//!
//! Command-line harness for the Keycloak admin REST API.
//!
//! This crate provides command-line utilities for:
//! - User management (list, get, create, update, delete, count)
//! - Client management (list, get, secret)
//! - Authentication flow management (list, get, create, copy, delete,
//!   executions, provider listings)
//! - Required action management (list, get, register, update, delete)
//!
//! The admin API is reached through the `kc-admin-client` crate with a
//! bearer token supplied via flag, environment or the config file. Token
//! acquisition is left to the operator.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
// Allow some stylistic clippy lints
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::future_not_send)]
#![allow(clippy::option_if_let_else)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};

//! # kc-admin-client
//!
//! Typed client for the Keycloak admin REST API.
//!
//! Every operation goes through one request-building and dispatch path:
//! a wrapper method names its HTTP verb, a path template with `:name`
//! placeholders, the parameters that fill it, and optionally a typed JSON
//! body or result. Parameters with no matching placeholder become query
//! parameters. The caller supplies a bearer access token per call;
//! obtaining and refreshing tokens is out of scope.
//!
//! ## Covered areas
//!
//! | Area | Endpoints |
//! |------|-----------|
//! | Authentication management | flows, executions, authenticator configuration, providers, required actions |
//! | Client management | client listing and lookup, client secret |
//! | User management | lookup, creation, update, deletion, count, groups, action emails, enrolment codes, shadow users |
//!
//! ## Modules
//!
//! - [`client`] - The dispatch layer and its verb methods
//! - [`config`] - Client construction settings
//! - [`dto`] - Representations exchanged with the server
//! - [`error`] - Error taxonomy and result alias
//! - [`request`] - Path templates, parameters and query assembly
//!
//! ## Quick start
//!
//! ```ignore
//! use kc_admin_client::{AdminClient, Config};
//!
//! let client = AdminClient::new(&Config::new("http://localhost:8080"))?;
//! let clients = client.get_clients(&token, "demo", &[]).await?;
//! let app1 = client
//!     .get_clients(&token, "demo", &["clientId", "app1"])
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

mod api;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod request;

pub use client::AdminClient;
pub use config::Config;
pub use error::{Error, Result};
pub use request::RequestSpec;

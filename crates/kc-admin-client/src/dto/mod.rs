//! Representations exchanged with the admin API.
//!
//! Every field is optional: responses populate whatever the server sent
//! and leave the rest `None`, request bodies omit `None` fields entirely.
//! The same types serve both directions.

pub mod authentication;
pub mod client;
pub mod user;

pub use authentication::{
    AuthenticationExecutionExportRepresentation, AuthenticationExecutionInfoRepresentation,
    AuthenticationExecutionRepresentation, AuthenticationFlowRepresentation,
    AuthenticatorConfigInfoRepresentation, AuthenticatorConfigRepresentation,
    ConfigPropertyRepresentation, RequiredActionProviderRepresentation,
};
pub use client::{ClientRepresentation, CredentialRepresentation};
pub use user::{
    FederatedIdentityRepresentation, GroupRepresentation, SmsCodeRepresentation,
    UserRepresentation, UsersPageRepresentation,
};

/// JSON object with no fixed schema.
///
/// The provider listing endpoints return objects whose shape depends on
/// the providers deployed on the server, so they decode into this open
/// map instead of a struct.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

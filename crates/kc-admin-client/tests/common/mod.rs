//! Shared helpers for the API tests.

use kc_admin_client::{AdminClient, Config};
use wiremock::MockServer;

/// Token sent by every test request.
pub const TOKEN: &str = "test-token";

/// Builds a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::new(&Config::new(server.uri())).expect("client construction")
}

//! Client management endpoints.

use crate::client::AdminClient;
use crate::dto::{ClientRepresentation, CredentialRepresentation};
use crate::error::Result;
use crate::request::RequestSpec;

const CLIENTS_PATH: &str = "/auth/admin/realms/:realm/clients";
const CLIENT_ID_PATH: &str = "/auth/admin/realms/:realm/clients/:id";
const CLIENT_SECRET_PATH: &str = "/auth/admin/realms/:realm/clients/:id/client-secret";

impl AdminClient {
    /// Returns the clients belonging to the realm.
    ///
    /// Recognised filters, passed as alternating key/value strings:
    /// `clientId` (filter by client ID) and `viewableOnly` (drop clients
    /// the caller cannot view in full, default `false`).
    pub async fn get_clients(
        &self,
        access_token: &str,
        realm: &str,
        params: &[&str],
    ) -> Result<Vec<ClientRepresentation>> {
        let spec = RequestSpec::new(CLIENTS_PATH)
            .param("realm", realm)
            .query_list(params)?;
        self.get(access_token, spec).await
    }

    /// Returns the client with the given internal ID.
    pub async fn get_client(
        &self,
        access_token: &str,
        realm: &str,
        id: &str,
    ) -> Result<ClientRepresentation> {
        let spec = RequestSpec::new(CLIENT_ID_PATH)
            .param("realm", realm)
            .param("id", id);
        self.get(access_token, spec).await
    }

    /// Returns the secret credential of the client with the given
    /// internal ID.
    pub async fn get_client_secret(
        &self,
        access_token: &str,
        realm: &str,
        id: &str,
    ) -> Result<CredentialRepresentation> {
        let spec = RequestSpec::new(CLIENT_SECRET_PATH)
            .param("realm", realm)
            .param("id", id);
        self.get(access_token, spec).await
    }
}

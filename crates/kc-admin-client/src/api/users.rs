//! User management endpoints.
//!
//! Listing and creation go through the account-realm-scoped users API,
//! which distinguishes the realm the token was issued for from the realm
//! acted on. Everything else uses the standard admin paths.

use crate::client::AdminClient;
use crate::dto::{
    FederatedIdentityRepresentation, GroupRepresentation, SmsCodeRepresentation,
    UserRepresentation, UsersPageRepresentation,
};
use crate::error::Result;
use crate::request::RequestSpec;

const USERS_EXTENSION_PATH: &str = "/auth/realms/:realmReq/api/admin/realms/:realm/users";
const USER_COUNT_PATH: &str = "/auth/admin/realms/:realm/users/count";
const USER_ID_PATH: &str = "/auth/admin/realms/:realm/users/:id";
const USER_GROUPS_PATH: &str = "/auth/admin/realms/:realm/users/:id/groups";
const EXECUTE_ACTIONS_EMAIL_PATH: &str =
    "/auth/admin/realms/:realm/users/:id/execute-actions-email";
const SEND_REMINDER_EMAIL_PATH: &str = "/auth/realms/:realm/onboarding/sendReminderEmail";
const SEND_NEW_ENROLMENT_CODE_PATH: &str = "/auth/realms/:realm/smsApi/sendNewCode";
const SHADOW_USER_PATH: &str = "/auth/admin/realms/:realm/users/:id/federated-identity/:provider";

impl AdminClient {
    /// Returns a page of users of the target realm, filtered by the query
    /// parameters.
    ///
    /// `req_realm` is the realm the token was issued for, `target_realm`
    /// the realm searched. Recognised filters, passed as alternating
    /// key/value strings: `email`, `first` (paging offset), `firstName`,
    /// `lastName`, `username`, `max` (page size, default 100) and `search`
    /// (matched against username, first name, last name and email).
    pub async fn get_users(
        &self,
        access_token: &str,
        req_realm: &str,
        target_realm: &str,
        params: &[&str],
    ) -> Result<UsersPageRepresentation> {
        let spec = RequestSpec::new(USERS_EXTENSION_PATH)
            .param("realmReq", req_realm)
            .param("realm", target_realm)
            .query_list(params)?;
        self.get(access_token, spec).await
    }

    /// Creates a user in the target realm. Returns the `Location` header
    /// pointing at the new resource, when the server set one.
    pub async fn create_user(
        &self,
        access_token: &str,
        req_realm: &str,
        target_realm: &str,
        user: &UserRepresentation,
    ) -> Result<Option<String>> {
        let spec = RequestSpec::new(USERS_EXTENSION_PATH)
            .param("realmReq", req_realm)
            .param("realm", target_realm);
        self.post(access_token, spec, user).await
    }

    /// Returns the number of users in the realm.
    pub async fn count_users(&self, access_token: &str, realm: &str) -> Result<i32> {
        let spec = RequestSpec::new(USER_COUNT_PATH).param("realm", realm);
        self.get(access_token, spec).await
    }

    /// Returns the user with the given ID.
    pub async fn get_user(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<UserRepresentation> {
        let spec = RequestSpec::new(USER_ID_PATH)
            .param("realm", realm)
            .param("id", user_id);
        self.get(access_token, spec).await
    }

    /// Returns the groups the user belongs to.
    pub async fn get_groups_of_user(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<Vec<GroupRepresentation>> {
        let spec = RequestSpec::new(USER_GROUPS_PATH)
            .param("realm", realm)
            .param("id", user_id);
        self.get(access_token, spec).await
    }

    /// Updates the user.
    pub async fn update_user(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
        user: &UserRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(USER_ID_PATH)
            .param("realm", realm)
            .param("id", user_id);
        self.put(access_token, spec, user).await
    }

    /// Deletes the user.
    pub async fn delete_user(&self, access_token: &str, realm: &str, user_id: &str) -> Result<()> {
        let spec = RequestSpec::new(USER_ID_PATH)
            .param("realm", realm)
            .param("id", user_id);
        self.delete(access_token, spec).await
    }

    /// Sends the user an email with a link to complete the given required
    /// actions.
    ///
    /// Extra query parameters (`lifespan`, `redirect_uri`, `client_id`)
    /// are passed as alternating key/value strings.
    pub async fn execute_actions_email(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
        actions: &[&str],
        params: &[&str],
    ) -> Result<()> {
        let spec = RequestSpec::new(EXECUTE_ACTIONS_EMAIL_PATH)
            .param("realm", realm)
            .param("id", user_id)
            .query_list(params)?;
        self.put(access_token, spec, actions).await
    }

    /// Asks the server to send the user a new enrolment code by SMS, and
    /// returns the generated code.
    pub async fn send_new_enrolment_code(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
    ) -> Result<SmsCodeRepresentation> {
        let spec = RequestSpec::new(SEND_NEW_ENROLMENT_CODE_PATH)
            .param("realm", realm)
            .query("userid", user_id);
        self.post_fetch(access_token, spec).await
    }

    /// Sends the user an onboarding reminder email.
    ///
    /// Extra query parameters (e.g. `lifespan`) are passed as alternating
    /// key/value strings.
    pub async fn send_reminder_email(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
        params: &[&str],
    ) -> Result<()> {
        let spec = RequestSpec::new(SEND_REMINDER_EMAIL_PATH)
            .param("realm", realm)
            .query_list(params)?
            .query("userid", user_id);
        self.post_empty(access_token, spec).await.map(|_| ())
    }

    /// Links the user to an existing identity at the given external
    /// provider, creating a shadow of that identity in the realm.
    pub async fn create_shadow_user(
        &self,
        access_token: &str,
        realm: &str,
        user_id: &str,
        provider: &str,
        identity: &FederatedIdentityRepresentation,
    ) -> Result<()> {
        let spec = RequestSpec::new(SHADOW_USER_PATH)
            .param("realm", realm)
            .param("id", user_id)
            .param("provider", provider);
        self.post(access_token, spec, identity).await.map(|_| ())
    }
}

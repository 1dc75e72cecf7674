//! The HTTP dispatch layer every endpoint wrapper goes through.

use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::RequestSpec;

/// Client for the Keycloak admin REST API.
///
/// One instance targets one server. The client keeps no per-request state,
/// so `&self` methods may be called from concurrent tasks, and clones
/// share the underlying connection pool. Every call takes the bearer
/// access token to send; obtaining and refreshing tokens is the caller's
/// concern.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdminClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the server URL does not parse as an
    /// absolute URL or the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.server_url).map_err(|e| {
            Error::Config(format!("invalid server URL {}: {e}", config.server_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid server URL {base_url}: not a base URL"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// The server this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON response body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        access_token: &str,
        spec: RequestSpec,
    ) -> Result<T> {
        let response = self.execute(Method::GET, access_token, spec, None).await?;
        decode(response).await
    }

    /// Sends a POST request with a JSON body. Returns the `Location`
    /// header of the created resource when the server set one; the
    /// response body is discarded.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        spec: RequestSpec,
        body: &B,
    ) -> Result<Option<String>> {
        let payload = serde_json::to_vec(body).map_err(Error::Decode)?;
        let response = self
            .execute(Method::POST, access_token, spec, Some(payload))
            .await?;
        Ok(location(&response))
    }

    /// Sends a body-less POST request, returning the `Location` header
    /// when the server set one.
    pub async fn post_empty(
        &self,
        access_token: &str,
        spec: RequestSpec,
    ) -> Result<Option<String>> {
        let response = self.execute(Method::POST, access_token, spec, None).await?;
        Ok(location(&response))
    }

    /// Sends a body-less POST request and decodes the JSON response body.
    pub async fn post_fetch<T: DeserializeOwned>(
        &self,
        access_token: &str,
        spec: RequestSpec,
    ) -> Result<T> {
        let response = self.execute(Method::POST, access_token, spec, None).await?;
        decode(response).await
    }

    /// Sends a PUT request with a JSON body, discarding the response body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        spec: RequestSpec,
        body: &B,
    ) -> Result<()> {
        let payload = serde_json::to_vec(body).map_err(Error::Decode)?;
        self.execute(Method::PUT, access_token, spec, Some(payload))
            .await?;
        Ok(())
    }

    /// Sends a DELETE request, discarding the response body.
    pub async fn delete(&self, access_token: &str, spec: RequestSpec) -> Result<()> {
        self.execute(Method::DELETE, access_token, spec, None)
            .await?;
        Ok(())
    }

    /// Builds the URL, attaches the bearer token and optional JSON body,
    /// sends the request and checks the response status.
    async fn execute(
        &self,
        method: Method,
        access_token: &str,
        spec: RequestSpec,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let url = spec.build_url(&self.base_url)?;
        tracing::debug!(method = %method, url = %url, "sending admin request");

        let mut request = self.http.request(method, url).bearer_auth(access_token);
        if let Some(payload) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "admin response received");

        if status.is_success() {
            Ok(response)
        } else {
            // A body that fails to read is a transport problem, not an
            // empty API answer.
            let body = response.text().await?;
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Reads the full response body and decodes it as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(Error::Decode)
}

/// Extracts the `Location` header, if present and valid UTF-8.
fn location(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

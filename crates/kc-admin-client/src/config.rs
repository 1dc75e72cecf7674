//! Client construction settings.

use std::time::Duration;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for an [`AdminClient`](crate::AdminClient).
///
/// Fixed once the client is built; there is no way to change them on a
/// live client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Keycloak server, e.g. `http://localhost:8080`.
    pub server_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration for the given server with the default
    /// 30 second timeout.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Replaces the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = Config::new("http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.server_url, "http://localhost:8080");
    }

    #[test]
    fn timeout_can_be_overridden() {
        let config = Config::new("http://localhost:8080").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
